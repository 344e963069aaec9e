//! 書籍カード
//!
//! カバー（トリガー領域）に入ると裏返り、カード全体から離れたときだけ
//! 表に戻る（カバーから出てもカード上にいる間は裏のまま）。
//! 状態遷移は `Catalog::card_event` に任せる。

use leptos::prelude::*;
use book_catalog_common::{CardEvent, CardView, Catalog, TagKind};

#[component]
pub fn BookCard(card: CardView, catalog: RwSignal<Catalog>) -> impl IntoView {
    let id = card.id.clone();
    let flipped = {
        let id = id.clone();
        Memo::new(move |_| catalog.with(|c| c.face(&id).is_flipped()))
    };

    let send = move |event: CardEvent| {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| catalog.update(|c| {
            c.card_event(&id, event);
        })
    };

    let tags = card
        .tags
        .iter()
        .map(|tag| {
            let class = match tag.kind {
                TagKind::Genre => "tag tag-genre",
                TagKind::Format => "tag tag-format",
            };
            view! { <span class=class>{tag.label.clone()}</span> }
        })
        .collect_view();

    let alt = card.cover_alt();

    view! {
        <div class="book-card" on:mouseleave=send(CardEvent::CardLeave)>
            <div
                class="book-card-inner"
                class:flipped=move || flipped.get()
                style:transform=move || {
                    if flipped.get() { "rotateY(180deg)" } else { "rotateY(0deg)" }
                }
            >
                <div class="book-card-front">
                    <div
                        class="cover-trigger"
                        on:mouseenter=send(CardEvent::TriggerEnter)
                        on:mouseleave=send(CardEvent::TriggerLeave)
                    >
                        <Cover image=card.image.clone() alt=alt.clone() />
                    </div>
                    <div class="book-info">
                        <h3 class="book-title">{card.main_title.clone()}</h3>
                        {card.subtitle.clone().map(|s| view! { <p class="book-subtitle">{s}</p> })}
                        <p class="book-author">{format!("by {}", card.author)}</p>
                        <div class="book-tags">{tags}</div>
                        <dl class="book-details">
                            <dt>"Publisher"</dt>
                            <dd>{card.publisher.clone()}</dd>
                            <dt>"ISBN"</dt>
                            <dd>{card.isbn.clone()}</dd>
                            <dt>"Published"</dt>
                            <dd>{card.published.clone()}</dd>
                        </dl>
                    </div>
                    <div class="book-footer">
                        <a
                            href=card.explorer_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            title=card.id.clone()
                        >
                            {card.short_id.clone()}
                        </a>
                    </div>
                </div>
                <div class="book-card-back">
                    <Cover image=card.image.clone() alt=alt />
                    <h3 class="book-title">{card.full_title.clone()}</h3>
                    <p class="book-author">{card.author.clone()}</p>
                </div>
            </div>
        </div>
    }
}

/// カバー画像（なければアイコン）
#[component]
fn Cover(image: Option<String>, alt: String) -> impl IntoView {
    match image {
        Some(src) => view! { <img class="book-cover" src=src alt=alt loading="lazy" /> }.into_any(),
        None => view! { <div class="book-cover placeholder" aria-label=alt>"📖"</div> }.into_any(),
    }
}
