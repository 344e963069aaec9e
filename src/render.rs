//! 端末向けの描画
//!
//! `Presentation` をテキストにする。状態の判断はすべて共通ライブラリ側で行い、
//! ここでは整形だけを担当する。

use book_catalog_common::presentation::{EMPTY_MESSAGE, EMPTY_TITLE};
use book_catalog_common::{CardFace, CardView, Presentation, TagKind};

const RULE_WIDTH: usize = 48;

/// 描画内容全体をテキストに
pub fn render(presentation: &Presentation) -> String {
    match presentation {
        Presentation::Skeleton(count) => render_skeleton(*count),
        Presentation::Empty => render_empty(),
        Presentation::Cards(cards) => cards
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// プレースホルダーカード
pub fn render_skeleton(count: usize) -> String {
    (0..count)
        .map(|_| {
            [
                rule('┌'),
                "  ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒".to_string(),
                "  ▒▒▒▒▒▒▒▒▒▒▒".to_string(),
                "  ▒▒▒▒▒▒▒   ▒▒▒▒▒▒▒▒▒".to_string(),
                rule('└'),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// 空状態
pub fn render_empty() -> String {
    format!("\n  📚 {}\n\n  {}\n", EMPTY_TITLE, EMPTY_MESSAGE)
}

/// 現在の面でカードを描画
pub fn render_card(card: &CardView) -> String {
    match card.face {
        CardFace::Front => render_card_front(card),
        CardFace::Back => render_card_back(card),
    }
}

/// 表面: タイトル・著者・タグ・詳細・エクスプローラーリンク
pub fn render_card_front(card: &CardView) -> String {
    let mut lines = vec![rule('┌')];

    lines.push(format!("  {}", cover_line(card)));
    lines.push(format!("  {}", card.main_title));
    if let Some(subtitle) = &card.subtitle {
        lines.push(format!("    {}", subtitle));
    }
    lines.push(format!("  by {}", card.author));

    if !card.tags.is_empty() {
        let tags = card
            .tags
            .iter()
            .map(|tag| match tag.kind {
                TagKind::Genre => format!("[{}]", tag.label),
                TagKind::Format => format!("({})", tag.label),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  {}", tags));
    }

    lines.push(format!("  {:<10} {}", "Publisher", card.publisher));
    lines.push(format!("  {:<10} {}", "ISBN", card.isbn));
    lines.push(format!("  {:<10} {}", "Published", card.published));
    lines.push(format!("  {}  {}", card.short_id, card.explorer_url));
    lines.push(rule('└'));

    lines.join("\n") + "\n"
}

/// 裏面: カバーと分割前のタイトル・著者
pub fn render_card_back(card: &CardView) -> String {
    [
        rule('┌'),
        format!("  {}", cover_line(card)),
        format!("  {}", card.full_title),
        format!("  {}", card.author),
        rule('└'),
    ]
    .join("\n")
        + "\n"
}

fn cover_line(card: &CardView) -> String {
    match &card.image {
        Some(url) => format!("🖼  {} ({})", card.cover_alt(), url),
        None => "📖 (no cover)".to_string(),
    }
}

fn rule(corner: char) -> String {
    format!("{}{}", corner, "─".repeat(RULE_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_has_requested_cards() {
        let text = render_skeleton(8);
        assert_eq!(text.matches('┌').count(), 8);
    }

    #[test]
    fn test_empty_state_message() {
        let text = render(&Presentation::Empty);
        assert!(text.contains("Nothing to show"));
        assert!(text.contains("Please try again later."));
    }
}
