//! JSON-RPC（getProgramAccounts）のリクエスト/レスポンス
//!
//! 通信そのものはCLI（reqwest）とWeb（fetch）がそれぞれ行い、
//! ここではリクエストの組み立てとレスポンスの解釈だけを共有する。

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::account::decode_book_account;
use crate::error::{Error, Result};
use crate::schema::ProgramSchema;
use crate::types::RawBookAccount;

/// JSON-RPCリクエスト
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: Value,
}

/// JSON-RPCレスポンス
#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Vec<KeyedAccount>>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct KeyedAccount {
    pubkey: String,
    account: AccountInfo,
}

#[derive(Debug, Deserialize)]
struct AccountInfo {
    /// [base64データ, "base64"]
    data: (String, String),
}

/// 書籍アカウントを一括取得するリクエストを作成
pub fn build_program_accounts_request(schema: &ProgramSchema, commitment: &str) -> RpcRequest {
    RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method: "getProgramAccounts",
        params: json!([
            schema.program_id,
            {
                "commitment": commitment,
                "encoding": "base64",
                "filters": [
                    { "memcmp": { "offset": 0, "bytes": schema.discriminator_base58() } }
                ]
            }
        ]),
    }
}

/// getProgramAccountsのレスポンス本文を生のレコード列に変換
///
/// 1件でもデコードできなければ全体をエラーにする。
pub fn parse_program_accounts_response(
    body: &str,
    schema: &ProgramSchema,
) -> Result<Vec<RawBookAccount>> {
    let response: RpcResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(Error::RpcResponse {
            code: error.code,
            message: error.message,
        });
    }

    let accounts = response
        .result
        .ok_or_else(|| Error::Rpc("response has neither result nor error".into()))?;

    accounts
        .iter()
        .map(|keyed| {
            let (data, encoding) = &keyed.account.data;
            if encoding != "base64" {
                return Err(Error::AccountData(format!(
                    "account {} uses unsupported encoding `{}`",
                    keyed.pubkey, encoding
                )));
            }
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| {
                    Error::AccountData(format!("account {} is not valid base64: {}", keyed.pubkey, e))
                })?;
            decode_book_account(&keyed.pubkey, &bytes, &schema.discriminator)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::account_discriminator;

    const PROGRAM_ID: &str = "BPFLoaderUpgradeab1e11111111111111111111111";

    fn schema() -> ProgramSchema {
        ProgramSchema::book(PROGRAM_ID).unwrap()
    }

    fn encoded_book(title: &str) -> String {
        let mut buf = account_discriminator("Book").to_vec();
        buf.extend_from_slice(&[1u8; 32]);
        for s in [title, "Author", "isbn", "", "Publisher"] {
            buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            buf.extend_from_slice(s.as_bytes());
        }
        buf.extend_from_slice(&0i64.to_le_bytes());
        for s in ["Hardcover", "Fantasy"] {
            buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            buf.extend_from_slice(s.as_bytes());
        }
        buf.extend_from_slice(&0i64.to_le_bytes());
        base64::engine::general_purpose::STANDARD.encode(buf)
    }

    #[test]
    fn test_request_shape() {
        let schema = schema();
        let request = build_program_accounts_request(&schema, "confirmed");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "getProgramAccounts");
        assert_eq!(value["params"][0], PROGRAM_ID);
        assert_eq!(value["params"][1]["commitment"], "confirmed");
        assert_eq!(value["params"][1]["encoding"], "base64");
        assert_eq!(value["params"][1]["filters"][0]["memcmp"]["offset"], 0);
        assert_eq!(
            value["params"][1]["filters"][0]["memcmp"]["bytes"],
            schema.discriminator_base58()
        );
    }

    #[test]
    fn test_parse_accounts_in_source_order() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [
                { "pubkey": "KeyB", "account": { "data": [encoded_book("Second"), "base64"], "lamports": 1 } },
                { "pubkey": "KeyA", "account": { "data": [encoded_book("First"), "base64"], "lamports": 1 } }
            ]
        })
        .to_string();

        let accounts = parse_program_accounts_response(&body, &schema()).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].public_key, "KeyB");
        assert_eq!(accounts[0].account.title.as_deref(), Some("Second"));
        assert_eq!(accounts[1].public_key, "KeyA");
    }

    #[test]
    fn test_parse_empty_result() {
        let body = r#"{"jsonrpc": "2.0", "id": 1, "result": []}"#;
        assert!(parse_program_accounts_response(body, &schema()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_object() {
        let body = r#"{"jsonrpc": "2.0", "id": 1, "error": {"code": -32010, "message": "excluded from account secondary indexes"}}"#;
        let err = parse_program_accounts_response(body, &schema()).unwrap_err();
        assert!(matches!(err, Error::RpcResponse { code: -32010, .. }));
    }

    #[test]
    fn test_one_bad_account_fails_batch() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": [
                { "pubkey": "KeyA", "account": { "data": [encoded_book("Ok"), "base64"] } },
                { "pubkey": "KeyBad", "account": { "data": ["AAAA", "base64"] } }
            ]
        })
        .to_string();

        let err = parse_program_accounts_response(&body, &schema()).unwrap_err();
        assert!(matches!(err, Error::AccountData(_)));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_program_accounts_response("<html>502</html>", &schema()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = parse_program_accounts_response(r#"{"jsonrpc": "2.0", "id": 1}"#, &schema()).unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
    }
}
