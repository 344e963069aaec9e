//! 読み込み中のプレースホルダー

use leptos::prelude::*;

#[component]
pub fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class="book-grid" aria-busy="true">
            {(0..count).map(|_| view! { <SkeletonCard /> }).collect_view()}
        </div>
    }
}

#[component]
fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="book-card skeleton">
            <div class="skeleton-cover" />
            <div class="skeleton-line wide" />
            <div class="skeleton-line" />
            <div class="skeleton-line short" />
        </div>
    }
}
