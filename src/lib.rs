pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod ledger;
pub mod render;

use config::Config;
use error::Result;
use ledger::{RpcBookSource, Source};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// ログ初期化（RUST_LOG > --verbose > info）。出力は標準エラー
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 引数と設定から取得元を決める
pub fn resolve_source(
    config: &Config,
    input: Option<&Path>,
    idl: Option<&Path>,
) -> Result<Source> {
    if let Some(path) = input {
        return Ok(Source::from(path.to_path_buf()));
    }

    let schema = config.program_schema(idl)?;
    let source = RpcBookSource::new(config.rpc_config(), schema)?;
    Ok(Source::Rpc(source))
}
