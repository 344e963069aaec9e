use crate::error::{CatalogError, Result};
use book_catalog_common::config::{PROGRAM_ID_ENV, RPC_URL_ENV};
use book_catalog_common::{ProgramSchema, RpcConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc_url: Option<String>,
    pub program_id: Option<String>,
    pub idl_path: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            if config.timeout_seconds == 0 {
                tracing::warn!("timeout_seconds が0のため既定値を使用します");
                config.timeout_seconds = book_catalog_common::config::DEFAULT_TIMEOUT_SECS;
            }
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("book-catalog").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            rpc_url: None,
            program_id: None,
            idl_path: None,
            timeout_seconds: book_catalog_common::config::DEFAULT_TIMEOUT_SECS,
        }
    }

    /// RPC接続設定（環境変数 > 設定ファイル > 既定値）
    pub fn rpc_config(&self) -> RpcConfig {
        self.rpc_config_with(|key| std::env::var(key).ok())
    }

    pub fn rpc_config_with(&self, lookup: impl Fn(&str) -> Option<String>) -> RpcConfig {
        let non_blank = |v: String| {
            let v = v.trim().to_string();
            (!v.is_empty()).then_some(v)
        };
        let rpc_url = lookup(RPC_URL_ENV)
            .and_then(non_blank)
            .or_else(|| self.rpc_url.clone().and_then(non_blank));

        let config = RpcConfig::default().with_timeout_secs(self.timeout_seconds);
        match rpc_url {
            Some(url) => config.with_rpc_url(url),
            None => config,
        }
    }

    /// 書籍プログラムのスキーマ
    ///
    /// 優先順位: 引数のIDL > 環境変数のプログラムID > 設定のプログラムID > 設定のIDL
    pub fn program_schema(&self, idl_override: Option<&Path>) -> Result<ProgramSchema> {
        self.program_schema_with(idl_override, |key| std::env::var(key).ok())
    }

    pub fn program_schema_with(
        &self,
        idl_override: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ProgramSchema> {
        if let Some(idl) = idl_override {
            return load_idl(idl);
        }

        let program_id = lookup(PROGRAM_ID_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| self.program_id.clone());
        if let Some(id) = program_id {
            return Ok(ProgramSchema::book(&id)?);
        }

        match &self.idl_path {
            Some(idl) => load_idl(idl),
            None => Err(CatalogError::MissingProgramId),
        }
    }

    pub fn set_rpc_url(&mut self, url: String) -> Result<()> {
        self.rpc_url = Some(url);
        self.save()
    }

    pub fn set_program_id(&mut self, program_id: String) -> Result<()> {
        ProgramSchema::book(&program_id)?;
        self.program_id = Some(program_id);
        self.save()
    }
}

fn load_idl(path: &Path) -> Result<ProgramSchema> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(ProgramSchema::from_idl_json(&content)?)
}
