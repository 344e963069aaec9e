//! 対話式ブラウズ
//!
//! 番号でカードを選ぶとカバー（トリガー領域）に入ったものとして裏返し、
//! Enterで一覧に戻るとカードから離れたものとして表に戻す。

use crate::error::{CatalogError, Result};
use crate::render;
use book_catalog_common::{CardEvent, Catalog, Presentation};
use dialoguer::Input;

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
pub enum BrowseAction {
    /// n番目（0始まり）のカードを裏返す
    Flip(usize),
    /// 終了
    Quit,
    /// 解釈できない入力
    Invalid(String),
}

/// 入力を解釈（番号は1始まり）
pub fn parse_browse_input(input: &str, card_count: usize) -> BrowseAction {
    let trimmed = input.trim();
    match trimmed {
        "q" | "Q" => BrowseAction::Quit,
        _ => match trimmed.parse::<usize>() {
            Ok(n) if (1..=card_count).contains(&n) => BrowseAction::Flip(n - 1),
            _ => BrowseAction::Invalid(trimmed.to_string()),
        },
    }
}

/// 読み込み済みのカタログを対話式で閲覧
pub fn run_browse(catalog: &mut Catalog) -> Result<()> {
    let ids: Vec<String> = catalog.books().iter().map(|b| b.id.clone()).collect();
    if ids.is_empty() {
        print!("{}", render::render(&catalog.presentation()));
        return Ok(());
    }

    loop {
        print_index(catalog);

        let input: String = Input::new()
            .with_prompt("番号でカードを裏返す (q:終了)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CatalogError::Prompt(e.to_string()))?;

        match parse_browse_input(&input, ids.len()) {
            BrowseAction::Quit => break,
            BrowseAction::Invalid(value) => {
                if !value.is_empty() {
                    println!("  → 1〜{} の番号を入力してください\n", ids.len());
                }
            }
            BrowseAction::Flip(index) => {
                let id = &ids[index];
                catalog.card_event(id, CardEvent::TriggerEnter);
                print_card(catalog, index);

                let _: String = Input::new()
                    .with_prompt("Enterで一覧に戻る")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| CatalogError::Prompt(e.to_string()))?;
                catalog.card_event(id, CardEvent::CardLeave);
                print_card(catalog, index);
            }
        }
    }

    Ok(())
}

fn print_index(catalog: &Catalog) {
    if let Presentation::Cards(cards) = catalog.presentation() {
        println!("---");
        for (i, card) in cards.iter().enumerate() {
            println!("[{}] {} / {}", i + 1, card.main_title, card.author);
        }
        println!("---");
    }
}

fn print_card(catalog: &Catalog, index: usize) {
    if let Presentation::Cards(cards) = catalog.presentation() {
        if let Some(card) = cards.get(index) {
            println!("{}", render::render_card(card));
        }
    }
}
