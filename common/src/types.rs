//! 書籍レコードの型定義
//!
//! - RawBookAccount: レジャーから取得した生のアカウント（型保証なし）
//! - TimestampValue: 形の定まらないタイムスタンプ値のタグ付きユニオン
//! - BookDisplay: 表示用に正規化した書籍（Record Decoderのみが生成）

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// JavaScriptの安全な整数の上限（2^53 - 1）
const MAX_SAFE_INTEGER: i128 = 9_007_199_254_740_991;

/// 大きな整数のラッパー
///
/// レジャー上の `i64` はこの形で届く。数値への変換は
/// 安全な整数の範囲内でのみ成功する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideInt(i128);

impl WideInt {
    pub fn new(value: i128) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i128 {
        self.0
    }

    /// 数値へ変換（範囲外ならNone）
    pub fn to_number(&self) -> Option<f64> {
        if self.0.abs() > MAX_SAFE_INTEGER {
            return None;
        }
        Some(self.0 as f64)
    }
}

impl From<i64> for WideInt {
    fn from(value: i64) -> Self {
        Self(value as i128)
    }
}

/// タイムスタンプ値（秒）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum TimestampValue {
    /// 値なし
    #[default]
    Absent,
    /// ネイティブの数値（エポック秒）
    Seconds(f64),
    /// 数値変換を持つラッパー
    Wide(WideInt),
    /// それ以外の表現（汎用の数値変換にかける）
    Other(String),
}

impl From<Value> for TimestampValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => TimestampValue::Absent,
            Value::Number(n) => TimestampValue::Seconds(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(b) => TimestampValue::Seconds(if b { 1.0 } else { 0.0 }),
            Value::String(s) => TimestampValue::Other(s),
            Value::Object(map) => match map.get("bn") {
                Some(Value::String(s)) => s
                    .trim()
                    .parse::<i128>()
                    .map(|v| TimestampValue::Wide(WideInt::new(v)))
                    .unwrap_or_else(|_| TimestampValue::Other(s.clone())),
                Some(Value::Number(n)) => match n.as_i64() {
                    Some(v) => TimestampValue::Wide(WideInt::from(v)),
                    None => TimestampValue::Other(n.to_string()),
                },
                _ => TimestampValue::Other(Value::Object(map).to_string()),
            },
            other => TimestampValue::Other(other.to_string()),
        }
    }
}

/// 生のアカウントのフィールド群
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBookFields {
    #[serde(deserialize_with = "loose_string")]
    pub owner: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub isbn: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub publisher: Option<String>,
    pub publication_date: TimestampValue,
    #[serde(deserialize_with = "loose_string")]
    pub format: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub genre: Option<String>,
    pub created_at: TimestampValue,
}

/// 生のアカウントレコード（公開鍵 + フィールド）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBookAccount {
    pub public_key: String,
    pub account: RawBookFields,
}

/// 表示用の書籍
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDisplay {
    /// アカウントの公開鍵（描画キー）
    pub id: String,
    pub owner: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub image: String,
    pub publisher: String,
    /// "14 March 2021" 形式。変換できなければNone
    pub publication_date: Option<String>,
    pub format: String,
    pub genre: String,
}

/// 文字列・数値・真偽値を文字列として受け取る。それ以外はNone
fn loose_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_int_to_number() {
        assert_eq!(WideInt::from(1_615_680_000i64).to_number(), Some(1_615_680_000.0));
        assert_eq!(WideInt::new(-5).to_number(), Some(-5.0));
    }

    #[test]
    fn test_wide_int_out_of_safe_range() {
        assert_eq!(WideInt::new(MAX_SAFE_INTEGER).to_number(), Some(9_007_199_254_740_991.0));
        assert_eq!(WideInt::new(MAX_SAFE_INTEGER + 1).to_number(), None);
        assert_eq!(WideInt::from(i64::MIN).to_number(), None);
    }

    #[test]
    fn test_timestamp_from_json_shapes() {
        let parse = |s: &str| serde_json::from_str::<TimestampValue>(s).unwrap();

        assert_eq!(parse("null"), TimestampValue::Absent);
        assert_eq!(parse("1615680000"), TimestampValue::Seconds(1_615_680_000.0));
        assert_eq!(parse("\"1615680000\""), TimestampValue::Other("1615680000".into()));
        assert_eq!(
            parse(r#"{"bn": "1615680000"}"#),
            TimestampValue::Wide(WideInt::new(1_615_680_000))
        );
        assert!(matches!(parse("[1, 2]"), TimestampValue::Other(_)));
    }

    #[test]
    fn test_raw_account_from_dump() {
        let json = r#"{
            "publicKey": "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin",
            "account": {
                "title": "Dune",
                "author": "Frank Herbert",
                "isbn": 9780441013593,
                "publicationDate": {"bn": "-141523200"}
            }
        }"#;
        let raw: RawBookAccount = serde_json::from_str(json).unwrap();

        assert_eq!(raw.public_key, "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
        assert_eq!(raw.account.title.as_deref(), Some("Dune"));
        // 数値のISBNは文字列として受け取る
        assert_eq!(raw.account.isbn.as_deref(), Some("9780441013593"));
        assert_eq!(raw.account.publisher, None);
        assert_eq!(
            raw.account.publication_date,
            TimestampValue::Wide(WideInt::new(-141_523_200))
        );
        assert_eq!(raw.account.created_at, TimestampValue::Absent);
    }

    #[test]
    fn test_raw_fields_ignore_unusable_values() {
        let json = r#"{"title": {"nested": true}, "genre": null, "format": ["paperback"]}"#;
        let fields: RawBookFields = serde_json::from_str(json).unwrap();

        assert_eq!(fields.title, None);
        assert_eq!(fields.genre, None);
        assert_eq!(fields.format, None);
    }

    #[test]
    fn test_book_display_serializes_camel_case() {
        let book = BookDisplay {
            id: "abc".into(),
            publication_date: Some("14 March 2021".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["publicationDate"], "14 March 2021");
        assert_eq!(json["id"], "abc");
    }
}
