//! Record Decoder
//!
//! 生のアカウントレコードを `BookDisplay` に変換する。
//! 失敗は一切返さず、解釈できない値は None / 空文字列に落とす。

use chrono::{DateTime, Utc};

use crate::types::{BookDisplay, RawBookAccount, TimestampValue};

/// 表現可能な日時の上限（ミリ秒, ±100,000,000日）
const MAX_TIME_MILLIS: f64 = 8.64e15;

/// タイムスタンプ値を秒に変換
///
/// # Returns
/// * `Some(秒)` - 変換成功
/// * `None` - 値なし、または数値として解釈できない
pub fn timestamp_to_seconds(value: &TimestampValue) -> Option<f64> {
    let seconds = match value {
        TimestampValue::Absent => return None,
        TimestampValue::Seconds(n) => *n,
        TimestampValue::Wide(w) => w.to_number()?,
        TimestampValue::Other(s) => coerce_number(s)?,
    };
    if seconds.is_nan() {
        return None;
    }
    Some(seconds)
}

/// 汎用の数値変換（前後の空白は無視、空文字列は0、0x/0o/0b接頭辞も可）
fn coerce_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    trimmed.parse::<f64>().ok()
}

/// 秒を "<日> <月名> <年>" 形式に整形（UTC）
///
/// # Examples
/// ```
/// use book_catalog_common::format_publication_date;
///
/// assert_eq!(format_publication_date(1_615_680_000.0).as_deref(), Some("14 March 2021"));
/// ```
pub fn format_publication_date(seconds: f64) -> Option<String> {
    let millis = (seconds * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() > MAX_TIME_MILLIS {
        return None;
    }
    let date: DateTime<Utc> = DateTime::from_timestamp_millis(millis as i64)?;
    Some(date.format("%-d %B %Y").to_string())
}

/// タイムスタンプ値を日付文字列に変換
pub fn to_date_string(value: &TimestampValue) -> Option<String> {
    timestamp_to_seconds(value).and_then(format_publication_date)
}

/// 生のレコードを表示用の書籍に変換
pub fn decode_record(raw: &RawBookAccount) -> BookDisplay {
    let fields = &raw.account;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    BookDisplay {
        id: raw.public_key.clone(),
        owner: text(&fields.owner),
        title: text(&fields.title),
        author: text(&fields.author),
        isbn: text(&fields.isbn),
        image: text(&fields.image),
        publisher: text(&fields.publisher),
        publication_date: to_date_string(&fields.publication_date),
        format: text(&fields.format),
        genre: text(&fields.genre),
    }
}
