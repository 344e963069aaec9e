//! プログラムスキーマ
//!
//! 書籍アカウントを持つプログラムのIDとアカウント識別子（discriminator）。
//! プログラムIDから組み立てるか、Anchor IDL（JSON）から読み込む。

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// 書籍アカウント名
pub const BOOK_ACCOUNT_NAME: &str = "Book";

/// アカウント識別子の長さ
pub const DISCRIMINATOR_LEN: usize = 8;

/// 固定のプログラム/アカウントスキーマ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSchema {
    pub program_id: String,
    pub account_name: String,
    pub discriminator: [u8; DISCRIMINATOR_LEN],
}

/// Anchor IDL（必要な部分のみ）
#[derive(Deserialize)]
struct IdlDocument {
    address: Option<String>,
    #[serde(default)]
    metadata: Option<IdlMetadata>,
    #[serde(default)]
    accounts: Vec<IdlAccount>,
}

#[derive(Deserialize)]
struct IdlMetadata {
    address: Option<String>,
}

#[derive(Deserialize)]
struct IdlAccount {
    name: String,
    discriminator: Option<Vec<u8>>,
}

impl ProgramSchema {
    /// プログラムIDとアカウント名から作成
    pub fn new(program_id: &str, account_name: &str) -> Result<Self> {
        validate_pubkey(program_id)?;
        Ok(Self {
            program_id: program_id.to_string(),
            account_name: account_name.to_string(),
            discriminator: account_discriminator(account_name),
        })
    }

    /// 書籍アカウントのスキーマ
    pub fn book(program_id: &str) -> Result<Self> {
        Self::new(program_id, BOOK_ACCOUNT_NAME)
    }

    /// Anchor IDLから書籍アカウントのスキーマを読み込む
    ///
    /// 新形式（`address` と `accounts[].discriminator`）と
    /// 旧形式（`metadata.address`、識別子なし）の両方に対応する。
    pub fn from_idl_json(json: &str) -> Result<Self> {
        let idl: IdlDocument = serde_json::from_str(json)?;

        let program_id = idl
            .address
            .or_else(|| idl.metadata.and_then(|m| m.address))
            .ok_or_else(|| Error::Idl("program address not found".into()))?;
        validate_pubkey(&program_id)?;

        let account = idl
            .accounts
            .into_iter()
            .find(|a| a.name == BOOK_ACCOUNT_NAME)
            .ok_or_else(|| Error::Idl(format!("account `{}` not found", BOOK_ACCOUNT_NAME)))?;

        let discriminator = match account.discriminator {
            Some(bytes) => bytes.as_slice().try_into().map_err(|_| {
                Error::Idl(format!(
                    "discriminator must be {} bytes, got {}",
                    DISCRIMINATOR_LEN,
                    bytes.len()
                ))
            })?,
            None => account_discriminator(&account.name),
        };

        Ok(Self {
            program_id,
            account_name: account.name,
            discriminator,
        })
    }

    /// memcmpフィルタ用のbase58表現
    pub fn discriminator_base58(&self) -> String {
        bs58::encode(self.discriminator).into_string()
    }
}

/// `sha256("account:<名前>")` の先頭8バイト
pub fn account_discriminator(account_name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let digest = Sha256::digest(format!("account:{}", account_name).as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}

fn validate_pubkey(key: &str) -> Result<()> {
    let bytes = bs58::decode(key)
        .into_vec()
        .map_err(|e| Error::Config(format!("invalid program id `{}`: {}", key, e)))?;
    if bytes.len() != 32 {
        return Err(Error::Config(format!(
            "invalid program id `{}`: expected 32 bytes, got {}",
            key,
            bytes.len()
        )));
    }
    Ok(())
}
