//! 表示モデル
//!
//! 表示状態ごとに、スケルトン（8枚固定）/ 空状態 / カード一覧のどれを
//! 描画するかを決める。CLIとWebの両方がこの結果だけを描画する。

use crate::card::CardFace;
use crate::catalog::{Catalog, ViewState};
use crate::title::split_title;
use crate::types::BookDisplay;

/// 読み込み中に表示するプレースホルダーの枚数
pub const SKELETON_CARD_COUNT: usize = 8;

/// 空状態の見出し
pub const EMPTY_TITLE: &str = "Nothing to show";

/// 空状態の本文
pub const EMPTY_MESSAGE: &str = "We couldn't load any books at the moment. Please try again later.";

/// 値がないときの表示
pub const MISSING_VALUE: &str = "—";

/// エクスプローラーのネットワーク
pub const EXPLORER_CLUSTER: &str = "devnet";

/// 描画内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// プレースホルダーカード（枚数）
    Skeleton(usize),
    /// 空状態メッセージ
    Empty,
    Cards(Vec<CardView>),
}

/// タグの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Genre,
    Format,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub label: String,
}

/// 1枚のカードの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub main_title: String,
    pub subtitle: Option<String>,
    /// 裏面に出す分割前のタイトル
    pub full_title: String,
    pub author: String,
    pub tags: Vec<Tag>,
    pub publisher: String,
    pub isbn: String,
    pub published: String,
    /// カバー画像（なければプレースホルダーアイコン）
    pub image: Option<String>,
    pub explorer_url: String,
    pub short_id: String,
    pub face: CardFace,
}

impl CardView {
    pub fn new(book: &BookDisplay, face: CardFace) -> Self {
        let parts = split_title(&book.title);

        let mut tags = Vec::new();
        if !book.genre.is_empty() {
            tags.push(Tag {
                kind: TagKind::Genre,
                label: book.genre.clone(),
            });
        }
        if !book.format.is_empty() {
            tags.push(Tag {
                kind: TagKind::Format,
                label: book.format.clone(),
            });
        }

        Self {
            id: book.id.clone(),
            main_title: parts.main,
            subtitle: parts.subtitle,
            full_title: book.title.clone(),
            author: book.author.clone(),
            tags,
            publisher: or_missing(&book.publisher),
            isbn: or_missing(&book.isbn),
            published: book
                .publication_date
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            image: (!book.image.is_empty()).then(|| book.image.clone()),
            explorer_url: explorer_url(&book.id),
            short_id: short_id(&book.id),
            face,
        }
    }

    pub fn cover_alt(&self) -> String {
        format!("Cover of {}", self.full_title)
    }
}

impl Catalog {
    /// 現在の状態に対応する描画内容
    pub fn presentation(&self) -> Presentation {
        match self.state() {
            ViewState::Loading => Presentation::Skeleton(SKELETON_CARD_COUNT),
            ViewState::Error => Presentation::Empty,
            ViewState::Loaded(books) => Presentation::Cards(
                books
                    .iter()
                    .map(|book| CardView::new(book, self.face(&book.id)))
                    .collect(),
            ),
        }
    }
}

/// エクスプローラー（Solscan）のアカウントURL
pub fn explorer_url(id: &str) -> String {
    format!("https://solscan.io/account/{}?cluster={}", id, EXPLORER_CLUSTER)
}

/// 先頭8文字...末尾6文字
pub fn short_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let head: String = chars.iter().take(8).collect();
    let tail: String = chars[chars.len().saturating_sub(6)..].iter().collect();
    format!("{}...{}", head, tail)
}

fn or_missing(value: &str) -> String {
    if value.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardEvent;
    use crate::error::Error;
    use crate::types::{RawBookAccount, RawBookFields, TimestampValue};

    const KEY: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

    fn book() -> BookDisplay {
        BookDisplay {
            id: KEY.into(),
            title: "Dune: Deluxe Edition".into(),
            author: "Frank Herbert".into(),
            genre: "Science Fiction".into(),
            publication_date: Some("14 March 2021".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_renders_eight_placeholders() {
        let catalog = Catalog::new();
        assert_eq!(catalog.presentation(), Presentation::Skeleton(8));
    }

    #[test]
    fn test_error_and_empty_render_identically() {
        let mut failed = Catalog::new();
        let ticket = failed.begin_refresh();
        failed.complete(ticket, Err(Error::Timeout(30)));

        let mut empty = Catalog::new();
        let ticket = empty.begin_refresh();
        empty.complete(ticket, Ok(vec![]));

        assert_eq!(failed.presentation(), Presentation::Empty);
        assert_eq!(empty.presentation(), failed.presentation());
    }

    #[test]
    fn test_loaded_renders_one_card_per_book() {
        let mut catalog = Catalog::new();
        let ticket = catalog.begin_refresh();
        let raw = |id: &str| RawBookAccount {
            public_key: id.into(),
            account: RawBookFields {
                publication_date: TimestampValue::Seconds(1_615_680_000.0),
                ..Default::default()
            },
        };
        catalog.complete(ticket, Ok(vec![raw("a"), raw("b"), raw("c")]));
        catalog.card_event("b", CardEvent::TriggerEnter);

        let Presentation::Cards(cards) = catalog.presentation() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].face, CardFace::Front);
        assert_eq!(cards[1].face, CardFace::Back);
        assert_eq!(cards[2].published, "14 March 2021");
    }

    #[test]
    fn test_card_view_fields() {
        let card = CardView::new(&book(), CardFace::Front);

        assert_eq!(card.main_title, "Dune");
        assert_eq!(card.subtitle.as_deref(), Some("Deluxe Edition"));
        assert_eq!(card.full_title, "Dune: Deluxe Edition");
        assert_eq!(card.publisher, "—");
        assert_eq!(card.isbn, "—");
        assert_eq!(card.published, "14 March 2021");
        assert_eq!(card.image, None);
        assert_eq!(card.cover_alt(), "Cover of Dune: Deluxe Edition");
    }

    #[test]
    fn test_card_view_tags_skip_empty() {
        let card = CardView::new(&book(), CardFace::Front);
        assert_eq!(
            card.tags,
            vec![Tag {
                kind: TagKind::Genre,
                label: "Science Fiction".into()
            }]
        );
    }

    #[test]
    fn test_missing_publication_date() {
        let mut book = book();
        book.publication_date = None;
        assert_eq!(CardView::new(&book, CardFace::Front).published, "—");
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            explorer_url(KEY),
            format!("https://solscan.io/account/{}?cluster=devnet", KEY)
        );
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id(KEY), "9xQeWvG8...usVFin");
        assert_eq!(short_id("abc"), "abc...abc");
    }
}
