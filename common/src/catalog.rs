//! Fetch Orchestrator + View State Machine
//!
//! `Catalog` が表示状態（Loading / Error / Loaded）とカードの表裏アリーナを持つ。
//! 取得は `BookSource` に委ね、結果をデコードして状態を丸ごと置き換える。
//!
//! UI側は `&mut` をawaitの間保持できないため、取得は
//! `begin_refresh` → (取得) → `complete` の2段に分けている。
//! 新しいチケットが発行されると古いチケットの完了は無視される。

use std::collections::HashSet;
use std::future::Future;

use tracing::{debug, error, info, warn};

use crate::card::{CardEvent, CardFace, CardFlips};
use crate::decoder::decode_record;
use crate::error::Result;
use crate::types::{BookDisplay, RawBookAccount};

/// 書籍レコードの取得元
pub trait BookSource {
    /// スキーマに一致する全アカウントを一括取得
    fn fetch_books(&self) -> impl Future<Output = Result<Vec<RawBookAccount>>>;
}

/// 表示状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    /// 取得失敗、または0件
    Error,
    Loaded(Vec<BookDisplay>),
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error => "error",
            ViewState::Loaded(_) => "loaded",
        }
    }
}

/// 取得サイクルの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// 書籍カタログ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    state: ViewState,
    flips: CardFlips,
    generation: u64,
    started: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// 読み込み済みの書籍（それ以外の状態では空）
    pub fn books(&self) -> &[BookDisplay] {
        match &self.state {
            ViewState::Loaded(books) => books,
            _ => &[],
        }
    }

    /// 有効化時の入口処理: まだ取得を始めていなければ開始する
    pub fn activate(&mut self) -> Option<RefreshTicket> {
        if self.started {
            return None;
        }
        Some(self.begin_refresh())
    }

    /// 取得を開始（Loadingへ遷移し、進行中の取得を置き換える）
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.started = true;
        self.state = ViewState::Loading;
        self.flips.clear();
        debug!(generation = self.generation, "book refresh started");
        RefreshTicket(self.generation)
    }

    /// 取得結果を反映
    ///
    /// # Returns
    /// * `true` - 反映した
    /// * `false` - 古いチケットのため無視した
    pub fn complete(&mut self, ticket: RefreshTicket, result: Result<Vec<RawBookAccount>>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "ignoring superseded book refresh"
            );
            return false;
        }

        self.state = match result {
            Ok(raw) => {
                let books = decode_all(&raw);
                if books.is_empty() {
                    info!("no book accounts found");
                    ViewState::Error
                } else {
                    info!(count = books.len(), "books loaded");
                    self.flips.reset(books.iter().map(|b| b.id.as_str()));
                    ViewState::Loaded(books)
                }
            }
            Err(e) => {
                error!(error = %e, "failed to fetch books");
                ViewState::Error
            }
        };
        true
    }

    /// 取得して状態を更新
    pub async fn refresh<S: BookSource>(&mut self, source: &S) {
        let ticket = self.begin_refresh();
        let result = source.fetch_books().await;
        self.complete(ticket, result);
    }

    /// カードにポインタイベントを適用
    pub fn card_event(&mut self, id: &str, event: CardEvent) -> Option<CardFace> {
        self.flips.apply(id, event)
    }

    pub fn face(&self, id: &str) -> CardFace {
        self.flips.face(id)
    }
}

/// 全レコードをデコード（空IDと重複IDは除外）
fn decode_all(raw: &[RawBookAccount]) -> Vec<BookDisplay> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(decode_record)
        .filter(|book| {
            if book.id.is_empty() {
                warn!(title = %book.title, "skipping book account without id");
                return false;
            }
            if !seen.insert(book.id.clone()) {
                warn!(id = %book.id, "skipping duplicate book account");
                return false;
            }
            true
        })
        .collect()
}
