//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// どのバリアントも取得失敗を表し、`Catalog` の境界で
/// `ViewState::Error` に畳み込まれる（利用者には表示しない）。
#[derive(Error, Debug)]
pub enum Error {
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("RPC error response ({code}): {message}")]
    RpcResponse { code: i64, message: String },

    #[error("Account data error: {0}")]
    AccountData(String),

    #[error("IDL error: {0}")]
    Idl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("RPC request timed out after {0}s")]
    Timeout(u64),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
