//! 書籍アカウントの取得元
//!
//! - RpcBookSource: JSON-RPC（getProgramAccounts）でレジャーから取得
//! - FileBookSource: 保存済みの生レコード（JSON）から取得

mod file_source;
mod rpc_client;

pub use file_source::FileBookSource;
pub use rpc_client::RpcBookSource;

use book_catalog_common::{BookSource, RawBookAccount};
use std::path::PathBuf;

/// CLIで使う取得元
pub enum Source {
    Rpc(RpcBookSource),
    File(FileBookSource),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Rpc(source) => source.endpoint().to_string(),
            Source::File(source) => source.path().display().to_string(),
        }
    }
}

impl BookSource for Source {
    async fn fetch_books(&self) -> book_catalog_common::Result<Vec<RawBookAccount>> {
        match self {
            Source::Rpc(source) => source.fetch_books().await,
            Source::File(source) => source.fetch_books().await,
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::File(FileBookSource::new(path))
    }
}
