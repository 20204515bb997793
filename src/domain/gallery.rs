// SPDX-License-Identifier: MPL-2.0
//! Gallery session: the ordered card list and the current position.
//!
//! The current index is only ever read or written through [`normalize_index`],
//! so it always lies in `[0, len)` whatever integer a navigation produced.

use super::card::Card;

/// Direction of a one-card navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// Go to the following card (swipe left, ArrowRight).
    Next,
    /// Go to the preceding card (swipe right, ArrowLeft).
    Previous,
}

impl NavigationDirection {
    /// Index delta applied by this direction.
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            NavigationDirection::Next => 1,
            NavigationDirection::Previous => -1,
        }
    }
}

/// Wraps `index` into `[0, len)` in both directions.
///
/// Returns `None` for an empty gallery.
#[must_use]
pub fn normalize_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = i64::try_from(len).ok()?;
    usize::try_from(index.rem_euclid(len)).ok()
}

/// Owned gallery state for one mounted gallery.
///
/// Created once the manifest is loaded and dropped when the gallery is torn
/// down. An empty session turns every navigation into a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GallerySession {
    cards: Vec<Card>,
    current_index: usize,
}

impl GallerySession {
    /// Creates a session starting at `start_index`, normalized into range.
    #[must_use]
    pub fn new(cards: Vec<Card>, start_index: i64) -> Self {
        let current_index = normalize_index(start_index, cards.len()).unwrap_or(0);
        Self {
            cards,
            current_index,
        }
    }

    /// Creates a session with no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current index, or `None` when the gallery is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current_index)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.current_index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the card one step away from the current one, without moving.
    #[must_use]
    pub fn peek(&self, direction: NavigationDirection) -> Option<usize> {
        self.offset_index(direction.delta())
    }

    fn offset_index(&self, delta: i64) -> Option<usize> {
        let current = i64::try_from(self.current_index).ok()?;
        normalize_index(current + delta, self.len())
    }

    /// Moves to `index` (any integer, wrapped) and returns the new index.
    pub fn go_to(&mut self, index: i64) -> Option<usize> {
        let normalized = normalize_index(index, self.len())?;
        self.current_index = normalized;
        Some(normalized)
    }

    /// Moves one card in `direction` and returns the new index.
    pub fn navigate(&mut self, direction: NavigationDirection) -> Option<usize> {
        let target = self.peek(direction)?;
        self.current_index = target;
        Some(target)
    }

    pub fn advance(&mut self) -> Option<usize> {
        self.navigate(NavigationDirection::Next)
    }

    pub fn retreat(&mut self) -> Option<usize> {
        self.navigate(NavigationDirection::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n).map(|i| Card::new(format!("{i}.png"), None)).collect()
    }

    #[test]
    fn normalize_wraps_both_directions() {
        for n in 1..8usize {
            for i in -50i64..50 {
                let wrapped = normalize_index(i, n).unwrap();
                assert!(wrapped < n);
                assert_eq!(Some(wrapped), normalize_index(i + n as i64, n));
            }
        }
        assert_eq!(normalize_index(-1, 3), Some(2));
        assert_eq!(normalize_index(5, 2), Some(1));
    }

    #[test]
    fn normalize_empty_is_none() {
        assert_eq!(normalize_index(0, 0), None);
        assert_eq!(normalize_index(-7, 0), None);
    }

    #[test]
    fn new_session_normalizes_start() {
        let session = GallerySession::new(cards(3), 7);
        assert_eq!(session.current_index(), Some(1));
        let session = GallerySession::new(cards(3), -1);
        assert_eq!(session.current_index(), Some(2));
    }

    #[test]
    fn navigation_wraps() {
        let mut session = GallerySession::new(cards(3), 2);
        assert_eq!(session.advance(), Some(0));
        assert_eq!(session.retreat(), Some(2));
        assert_eq!(session.retreat(), Some(1));
        assert_eq!(session.current().map(Card::file), Some("1.png"));
    }

    #[test]
    fn peek_does_not_move() {
        let session = GallerySession::new(cards(4), 0);
        assert_eq!(session.peek(NavigationDirection::Previous), Some(3));
        assert_eq!(session.peek(NavigationDirection::Next), Some(1));
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn empty_session_is_inert() {
        let mut session = GallerySession::empty();
        assert!(session.is_empty());
        assert_eq!(session.current_index(), None);
        assert_eq!(session.current(), None);
        assert_eq!(session.advance(), None);
        assert_eq!(session.retreat(), None);
        assert_eq!(session.go_to(4), None);
    }

    #[test]
    fn go_to_wraps_negative() {
        let mut session = GallerySession::new(cards(5), 0);
        assert_eq!(session.go_to(-6), Some(4));
    }
}
