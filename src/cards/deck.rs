//! Deck construction and draw primitives.
//!
//! Decks are `im::Vector`s so a `GameState` holding one clones in O(1).
//! The front of the vector is the top of the deck.

use im::Vector;

use super::card::Card;
use crate::core::error::EngineError;
use crate::core::rng::GameRng;

/// Build a full deck with one card per `(suit, rank)` pair, shuffled.
///
/// ```
/// use rust_siege::cards::create_deck;
/// use rust_siege::core::GameRng;
///
/// let deck = create_deck(6, 9, &mut GameRng::new(1));
/// assert_eq!(deck.len(), 54);
/// ```
pub fn create_deck(suit_count: u8, rank_count: u8, rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = (0..suit_count)
        .flat_map(|suit| (0..rank_count).map(move |rank| Card::new(suit, rank)))
        .collect();
    rng.shuffle(&mut cards);
    Vector::from(cards)
}

/// Remove and return the top card.
///
/// Fails with `EmptyDeck` when there is nothing to draw.
pub fn draw_card(deck: &mut Vector<Card>) -> Result<Card, EngineError> {
    deck.pop_front().ok_or(EngineError::EmptyDeck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_one_card_per_pair() {
        let deck = create_deck(5, 12, &mut GameRng::new(3));
        assert_eq!(deck.len(), 60);

        let unique: FxHashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 60);
        assert!(deck.iter().all(|c| c.suit < 5 && c.rank < 12));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = create_deck(4, 10, &mut GameRng::new(11));
        let b = create_deck(4, 10, &mut GameRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deck_is_shuffled() {
        let deck = create_deck(4, 10, &mut GameRng::new(11));
        let ordered: Vector<Card> = (0..4)
            .flat_map(|s| (0..10).map(move |r| Card::new(s, r)))
            .collect();
        assert_ne!(deck, ordered);
    }

    #[test]
    fn test_draw_takes_front() {
        let mut deck = create_deck(2, 3, &mut GameRng::new(0));
        let top = deck[0];

        assert_eq!(draw_card(&mut deck), Ok(top));
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn test_draw_empty_fails() {
        let mut deck = Vector::new();
        assert_eq!(draw_card(&mut deck), Err(EngineError::EmptyDeck));
    }
}
