//! Card Interaction Controller
//!
//! カードごとの表裏状態。カバー画像（トリガー領域）に入ると裏返り、
//! カード全体から出ると表に戻る。

use std::collections::HashMap;

/// カードの面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardFace::Front => "front",
            CardFace::Back => "back",
        }
    }

    pub fn is_flipped(&self) -> bool {
        matches!(self, CardFace::Back)
    }
}

/// ポインタイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// トリガー領域（カバー画像）に入った
    TriggerEnter,
    /// トリガー領域から出た（カード上には残っている）
    TriggerLeave,
    /// カード全体から出た
    CardLeave,
}

impl CardFace {
    /// イベント適用後の面
    pub fn apply(self, event: CardEvent) -> CardFace {
        match event {
            CardEvent::TriggerEnter => CardFace::Back,
            CardEvent::CardLeave => CardFace::Front,
            CardEvent::TriggerLeave => self,
        }
    }
}

/// 書籍ID → カード面 のアリーナ
///
/// 登録されていないIDへのイベントは無視する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFlips {
    faces: HashMap<String, CardFace>,
}

impl CardFlips {
    /// 全カードを表面で作り直す
    pub fn reset<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.faces = ids
            .into_iter()
            .map(|id| (id.to_string(), CardFace::Front))
            .collect();
    }

    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// 現在の面（未登録なら表）
    pub fn face(&self, id: &str) -> CardFace {
        self.faces.get(id).copied().unwrap_or_default()
    }

    /// イベントを適用し、適用後の面を返す
    pub fn apply(&mut self, id: &str, event: CardEvent) -> Option<CardFace> {
        let face = self.faces.get_mut(id)?;
        *face = face.apply(event);
        Some(*face)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_front() {
        assert_eq!(CardFace::default(), CardFace::Front);
    }

    #[test]
    fn test_trigger_enter_flips_to_back() {
        assert_eq!(CardFace::Front.apply(CardEvent::TriggerEnter), CardFace::Back);
        assert_eq!(CardFace::Back.apply(CardEvent::TriggerEnter), CardFace::Back);
    }

    #[test]
    fn test_card_leave_returns_front() {
        assert_eq!(CardFace::Back.apply(CardEvent::CardLeave), CardFace::Front);
        assert_eq!(CardFace::Front.apply(CardEvent::CardLeave), CardFace::Front);
    }

    #[test]
    fn test_trigger_leave_keeps_face() {
        let face = CardFace::Front
            .apply(CardEvent::TriggerEnter)
            .apply(CardEvent::TriggerLeave);
        assert_eq!(face, CardFace::Back);
        assert_eq!(CardFace::Front.apply(CardEvent::TriggerLeave), CardFace::Front);
    }

    #[test]
    fn test_arena_tracks_cards_independently() {
        let mut flips = CardFlips::default();
        flips.reset(["a", "b"]);

        assert_eq!(flips.apply("a", CardEvent::TriggerEnter), Some(CardFace::Back));
        assert_eq!(flips.face("a"), CardFace::Back);
        assert_eq!(flips.face("b"), CardFace::Front);

        assert_eq!(flips.apply("a", CardEvent::CardLeave), Some(CardFace::Front));
        assert_eq!(flips.face("a"), CardFace::Front);
    }

    #[test]
    fn test_arena_ignores_unknown_ids() {
        let mut flips = CardFlips::default();
        flips.reset(["a"]);

        assert_eq!(flips.apply("zzz", CardEvent::TriggerEnter), None);
        assert_eq!(flips.len(), 1);
        assert_eq!(flips.face("zzz"), CardFace::Front);
    }

    #[test]
    fn test_reset_returns_all_to_front() {
        let mut flips = CardFlips::default();
        flips.reset(["a"]);
        flips.apply("a", CardEvent::TriggerEnter);

        flips.reset(["a", "c"]);
        assert_eq!(flips.face("a"), CardFace::Front);
        assert_eq!(flips.len(), 2);

        flips.clear();
        assert!(flips.is_empty());
    }
}
