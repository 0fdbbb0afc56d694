//! The immutable card value.

use serde::{Deserialize, Serialize};

/// A single card: one suit, one rank.
///
/// Cards are plain values. Each `(suit, rank)` pair appears exactly once in a
/// deck, so equality doubles as identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    /// Suit, `0..suit_count`.
    pub suit: u8,
    /// Rank, `0..rank_count`.
    pub rank: u8,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: u8, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.rank, self.suit)
    }
}
