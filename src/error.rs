use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("プログラムIDが設定されていません。`book-catalog config --set-program-id <ID>` か環境変数 BOOK_PROGRAM_ID で設定してください")]
    MissingProgramId,

    #[error("HTTPエラー: {0}")]
    Http(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] book_catalog_common::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
