//! タイトル分割
//!
//! "メイン: サブ" 形式のタイトルを最後のコロンで分割する

/// 分割後のタイトル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    pub main: String,
    pub subtitle: Option<String>,
}

/// タイトルを最後のコロンでメインとサブタイトルに分割
///
/// コロンがなければタイトルをそのまま（空白も含めて）メインとする。
///
/// # Examples
/// ```
/// use book_catalog_common::split_title;
///
/// let parts = split_title("A: B: C");
/// assert_eq!(parts.main, "A: B");
/// assert_eq!(parts.subtitle.as_deref(), Some("C"));
/// ```
pub fn split_title(title: &str) -> TitleParts {
    match title.rfind(':') {
        None => TitleParts {
            main: title.to_string(),
            subtitle: None,
        },
        Some(index) => {
            let subtitle = title[index + 1..].trim();
            TitleParts {
                main: title[..index].trim().to_string(),
                subtitle: (!subtitle.is_empty()).then(|| subtitle.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_colon_keeps_title() {
        let parts = split_title("  The Hobbit ");
        assert_eq!(parts.main, "  The Hobbit ");
        assert_eq!(parts.subtitle, None);
    }

    #[test]
    fn test_split_at_colon() {
        let parts = split_title("Sapiens: A Brief History of Humankind");
        assert_eq!(parts.main, "Sapiens");
        assert_eq!(parts.subtitle.as_deref(), Some("A Brief History of Humankind"));
    }

    #[test]
    fn test_split_at_last_colon() {
        let parts = split_title("A: B: C");
        assert_eq!(parts.main, "A: B");
        assert_eq!(parts.subtitle.as_deref(), Some("C"));
    }

    #[test]
    fn test_trailing_colon_has_no_subtitle() {
        let parts = split_title("Title:");
        assert_eq!(parts.main, "Title");
        assert_eq!(parts.subtitle, None);

        let parts = split_title("Title:   ");
        assert_eq!(parts.subtitle, None);
    }

    #[test]
    fn test_empty_title() {
        let parts = split_title("");
        assert_eq!(parts.main, "");
        assert_eq!(parts.subtitle, None);
    }

    #[test]
    fn test_multibyte_title() {
        let parts = split_title("吾輩は猫である: 上巻");
        assert_eq!(parts.main, "吾輩は猫である");
        assert_eq!(parts.subtitle.as_deref(), Some("上巻"));
    }
}
