//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Book Catalog"</h1>
            <p class="header-sub">"Books stored on Solana"</p>
        </header>
    }
}
