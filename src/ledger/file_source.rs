//! 保存済みの生レコードを読む取得元
//!
//! 形式: `[{ "publicKey": "...", "account": { "title": ..., ... } }]`

use book_catalog_common::{BookSource, RawBookAccount};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileBookSource {
    path: PathBuf,
}

impl FileBookSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookSource for FileBookSource {
    async fn fetch_books(&self) -> book_catalog_common::Result<Vec<RawBookAccount>> {
        debug!(path = %self.path.display(), "reading book records");
        let content = tokio::fs::read_to_string(&self.path).await?;
        let accounts: Vec<RawBookAccount> = serde_json::from_str(&content)?;
        Ok(accounts)
    }
}
