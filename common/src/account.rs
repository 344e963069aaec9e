//! 書籍アカウントのバイト列デコード
//!
//! レイアウト（Anchor / Borsh）:
//! discriminator(8) | owner(32) | title | author | isbn | image | publisher
//! | publication_date(i64) | format | genre | created_at(i64)
//!
//! 文字列は u32 LE の長さ + UTF-8。

use crate::error::{Error, Result};
use crate::schema::DISCRIMINATOR_LEN;
use crate::types::{RawBookAccount, RawBookFields, TimestampValue, WideInt};

const PUBKEY_LEN: usize = 32;

/// バイト列を先頭から読むカーソル
struct AccountReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> AccountReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn read_bytes(&mut self, len: usize, field: &str) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| {
                Error::AccountData(format!(
                    "`{}` needs {} bytes at offset {}, only {} available",
                    field,
                    len,
                    self.offset,
                    self.data.len().saturating_sub(self.offset)
                ))
            })?;
        let bytes = &self.data[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    fn read_pubkey(&mut self, field: &str) -> Result<String> {
        let bytes = self.read_bytes(PUBKEY_LEN, field)?;
        Ok(bs58::encode(bytes).into_string())
    }

    fn read_u32(&mut self, field: &str) -> Result<u32> {
        let bytes = self.read_bytes(4, field)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(buf))
    }

    fn read_i64(&mut self, field: &str) -> Result<i64> {
        let bytes = self.read_bytes(8, field)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(i64::from_le_bytes(buf))
    }

    fn read_string(&mut self, field: &str) -> Result<String> {
        let len = self.read_u32(field)? as usize;
        let bytes = self.read_bytes(len, field)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::AccountData(format!("`{}` is not valid UTF-8: {}", field, e)))
    }
}

/// アカウントデータを生のレコードにデコード
///
/// 識別子が一致しない、データが途中で切れている、文字列が
/// UTF-8でない場合はエラー（取得失敗として扱われる）。
pub fn decode_book_account(
    public_key: &str,
    data: &[u8],
    discriminator: &[u8; DISCRIMINATOR_LEN],
) -> Result<RawBookAccount> {
    let mut reader = AccountReader::new(data);

    let head = reader.read_bytes(DISCRIMINATOR_LEN, "discriminator")?;
    if head != discriminator {
        return Err(Error::AccountData(format!(
            "account {} has discriminator {}, expected {}",
            public_key,
            hex::encode(head),
            hex::encode(discriminator)
        )));
    }

    let owner = reader.read_pubkey("owner")?;
    let title = reader.read_string("title")?;
    let author = reader.read_string("author")?;
    let isbn = reader.read_string("isbn")?;
    let image = reader.read_string("image")?;
    let publisher = reader.read_string("publisher")?;
    let publication_date = reader.read_i64("publication_date")?;
    let format = reader.read_string("format")?;
    let genre = reader.read_string("genre")?;
    let created_at = reader.read_i64("created_at")?;

    Ok(RawBookAccount {
        public_key: public_key.to_string(),
        account: RawBookFields {
            owner: Some(owner),
            title: Some(title),
            author: Some(author),
            isbn: Some(isbn),
            image: Some(image),
            publisher: Some(publisher),
            publication_date: TimestampValue::Wide(WideInt::from(publication_date)),
            format: Some(format),
            genre: Some(genre),
            created_at: TimestampValue::Wide(WideInt::from(created_at)),
        },
    })
}
