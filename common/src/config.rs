//! RPC接続設定
//!
//! 接続先は環境変数 `SOLANA_RPC_URL` から取得し、未設定ならローカルの
//! 開発用ノードを使う。

/// RPC URLの環境変数
pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";

/// プログラムIDの環境変数
pub const PROGRAM_ID_ENV: &str = "BOOK_PROGRAM_ID";

/// 既定のRPC URL（ローカルバリデータ）
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

/// 既定のコミットメント
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// 既定のタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// RPC接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub rpc_url: String,
    pub commitment: String,
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RpcConfig {
    /// 環境変数から読み込み
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込み（空文字列は未設定扱い）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rpc_url = lookup(RPC_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        Self {
            rpc_url,
            ..Self::default()
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// タイムアウト秒数（0は既定値扱い）
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = if timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };
        self
    }
}
