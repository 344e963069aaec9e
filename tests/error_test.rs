//! エラーケーステスト

use book_catalog::error::CatalogError;

/// CatalogErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CatalogError::Config("テスト設定エラー".to_string()),
        CatalogError::Http("client build failed".to_string()),
        CatalogError::FileNotFound("book.json".to_string()),
        CatalogError::Prompt("not a terminal".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingProgramIdエラーのメッセージ確認
#[test]
fn test_missing_program_id_message() {
    let display = format!("{}", CatalogError::MissingProgramId);

    assert!(display.contains("プログラムID"));
    assert!(display.contains("book-catalog config"));
    assert!(display.contains("BOOK_PROGRAM_ID"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CatalogError = io_err.into();

    assert!(matches!(err, CatalogError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CatalogError = json_err.into();

    assert!(matches!(err, CatalogError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = book_catalog_common::Error::Timeout(30);
    let err: CatalogError = common_err.into();

    assert!(matches!(err, CatalogError::Common(_)));
    assert_eq!(format!("{}", err), "RPC request timed out after 30s");
}
