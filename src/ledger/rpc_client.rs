//! reqwestによるJSON-RPCクライアント

use crate::error::{CatalogError, Result};
use book_catalog_common::{
    build_program_accounts_request, parse_program_accounts_response, BookSource, Error,
    ProgramSchema, RawBookAccount, RpcConfig,
};
use std::time::Duration;
use tracing::debug;

pub struct RpcBookSource {
    client: reqwest::Client,
    config: RpcConfig,
    schema: ProgramSchema,
}

impl RpcBookSource {
    pub fn new(config: RpcConfig, schema: ProgramSchema) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        Ok(Self {
            client,
            config,
            schema,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.rpc_url
    }

    async fn post(&self) -> book_catalog_common::Result<String> {
        let request = build_program_accounts_request(&self.schema, &self.config.commitment);
        debug!(
            endpoint = %self.config.rpc_url,
            program_id = %self.schema.program_id,
            "requesting book accounts"
        );

        let response = self
            .client
            .post(&self.config.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Rpc(format!("HTTP {}", status)));
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.config.timeout_secs)
        } else {
            Error::Rpc(e.to_string())
        }
    }
}

impl BookSource for RpcBookSource {
    async fn fetch_books(&self) -> book_catalog_common::Result<Vec<RawBookAccount>> {
        let body = self.post().await?;
        let accounts = parse_program_accounts_response(&body, &self.schema)?;
        debug!(count = accounts.len(), "book accounts received");
        Ok(accounts)
    }
}
