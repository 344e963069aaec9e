//! 空状態コンポーネント
//!
//! 取得失敗と0件のどちらもここに来る。

use leptos::prelude::*;
use book_catalog_common::presentation::{EMPTY_MESSAGE, EMPTY_TITLE};

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"📚"</div>
            <h2>{EMPTY_TITLE}</h2>
            <p>{EMPTY_MESSAGE}</p>
        </div>
    }
}
