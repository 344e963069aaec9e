//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use book_catalog_common::{BookSource, Catalog};
use crate::api::rpc::WebRpcSource;
use crate::components::{
    header::Header,
    footer::Footer,
    book_grid::BookGrid,
};

/// メインアプリケーションコンポーネント
///
/// 表示状態とカードの表裏はすべて `Catalog` が持つ。
#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new());

    // 有効化時に1回だけ取得
    if let Some(ticket) = catalog.try_update(|c| c.activate()).flatten() {
        spawn_local(async move {
            let result = match WebRpcSource::from_build_env() {
                Ok(source) => source.fetch_books().await,
                Err(e) => Err(e),
            };
            catalog.update(|c| {
                c.complete(ticket, result);
            });
        });
    }

    view! {
        <main class="page">
            <Header />
            <div class="content">
                <BookGrid catalog=catalog />
            </div>
            <Footer />
        </main>
    }
}
