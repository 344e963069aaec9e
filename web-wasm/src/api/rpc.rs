//! ブラウザのfetchによるJSON-RPC取得
//!
//! 接続先とプログラムIDはビルド時の環境変数
//! （SOLANA_RPC_URL / BOOK_PROGRAM_ID）から取得する。

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use book_catalog_common::config::{PROGRAM_ID_ENV, RPC_URL_ENV};
use book_catalog_common::{
    build_program_accounts_request, parse_program_accounts_response,
    BookSource, Error, ProgramSchema, RawBookAccount, Result, RpcConfig,
};

/// ビルド時の環境変数
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        RPC_URL_ENV => option_env!("SOLANA_RPC_URL"),
        PROGRAM_ID_ENV => option_env!("BOOK_PROGRAM_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

pub struct WebRpcSource {
    config: RpcConfig,
    schema: ProgramSchema,
}

impl WebRpcSource {
    pub fn new(config: RpcConfig, schema: ProgramSchema) -> Self {
        Self { config, schema }
    }

    /// ビルド時の設定から作成
    pub fn from_build_env() -> Result<Self> {
        Self::from_lookup(build_env)
    }

    /// 任意の参照関数から作成（プログラムIDが空なら設定エラー）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = RpcConfig::from_lookup(&lookup);
        let program_id = lookup(PROGRAM_ID_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set at build time", PROGRAM_ID_ENV)))?;
        let schema = ProgramSchema::book(&program_id)?;
        Ok(Self::new(config, schema))
    }

    /// リクエスト本文をPOSTし、レスポンス本文を返す
    async fn post(&self, body: String) -> std::result::Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.config.rpc_url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
        }

        let text = JsFuture::from(resp.text()?).await?;
        text.as_string()
            .ok_or_else(|| JsValue::from_str("response body is not text"))
    }
}

impl BookSource for WebRpcSource {
    async fn fetch_books(&self) -> Result<Vec<RawBookAccount>> {
        let request = build_program_accounts_request(&self.schema, &self.config.commitment);
        let body = serde_json::to_string(&request)?;
        tracing::debug!(endpoint = %self.config.rpc_url, "requesting book accounts");

        let millis = self.config.timeout_secs.saturating_mul(1000).min(u32::MAX as u64) as u32;
        let fetch = self.post(body);
        let timeout = TimeoutFuture::new(millis);
        futures::pin_mut!(fetch, timeout);

        match select(fetch, timeout).await {
            Either::Left((response, _)) => {
                let text = response.map_err(|e| Error::Rpc(format!("{:?}", e)))?;
                parse_program_accounts_response(&text, &self.schema)
            }
            Either::Right(_) => Err(Error::Timeout(self.config.timeout_secs)),
        }
    }
}
