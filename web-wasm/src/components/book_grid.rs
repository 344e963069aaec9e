//! 書籍グリッド
//!
//! 表示状態に応じてスケルトン / 空状態 / カード一覧を切り替える。

use leptos::prelude::*;
use book_catalog_common::presentation::SKELETON_CARD_COUNT;
use book_catalog_common::{CardFace, CardView, Catalog, ViewState};
use super::book_card::BookCard;
use super::empty_state::EmptyState;
use super::skeleton::SkeletonGrid;

#[component]
pub fn BookGrid(catalog: RwSignal<Catalog>) -> impl IntoView {
    let state = Memo::new(move |_| catalog.with(|c| c.state().as_str()));

    // 面はカード側で購読するので、ここでは表面で組み立てる
    let cards = Memo::new(move |_| {
        catalog.with(|c| match c.state() {
            ViewState::Loaded(books) => books
                .iter()
                .map(|book| CardView::new(book, CardFace::Front))
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        })
    });

    move || match state.get() {
        "loading" => view! { <SkeletonGrid count=SKELETON_CARD_COUNT /> }.into_any(),
        "loaded" => view! {
            <div class="book-grid">
                <For
                    each=move || cards.get()
                    key=|card| card.id.clone()
                    children=move |card| view! { <BookCard card=card catalog=catalog /> }
                />
            </div>
        }
        .into_any(),
        _ => view! { <EmptyState /> }.into_any(),
    }
}
