//! Game state for one match.
//!
//! ## GameState
//!
//! Everything the engine needs between calls:
//! - Turn flag and round status
//! - Oil count
//! - The seven sections, in fixed order
//! - Siege deck, both hands, discard pile
//!
//! Piles use `im::Vector` so the whole state clones in O(1), which makes it
//! cheap for callers to keep per-move snapshots. The orchestration layer can
//! also persist the state as opaque bytes via `to_bytes` / `from_bytes`.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::cards::Card;
use crate::sections::{Section, LAYOUT, SECTION_COUNT};

/// The two turn-owning roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attacker => f.write_str("attacker"),
            Side::Defender => f.write_str("defender"),
        }
    }
}

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Play continues.
    InProgress,
    /// A control check ended in a sweep; the attacker's hand was cleared.
    Swept,
    /// The attacker played with the siege deck empty; the defender's hand
    /// was cleared.
    SiegeExhausted,
}

impl RoundStatus {
    /// Whether the round has reached a terminal signal.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Side whose turn it is.
    pub turn: Side,

    /// Oil remaining.
    pub oil_count: u32,

    /// Board sections, left to right.
    pub sections: [Section; SECTION_COUNT],

    /// Shared draw pile. Front is the top.
    pub siege: Vector<Card>,

    /// Attacker's hand.
    pub attacker_hand: Vec<Card>,

    /// Defender's hand.
    pub defender_hand: Vec<Card>,

    /// Discarded cards (order carries no meaning).
    pub discard: Vector<Card>,

    /// Round progress.
    pub status: RoundStatus,

    total_cards: usize,
}

impl GameState {
    /// Assemble a state from its parts.
    ///
    /// `total_cards` is the size of the full deck; every later card count is
    /// checked against it.
    #[must_use]
    pub fn new(
        sections: [Section; SECTION_COUNT],
        siege: Vector<Card>,
        attacker_hand: Vec<Card>,
        defender_hand: Vec<Card>,
        oil_count: u32,
        total_cards: usize,
    ) -> Self {
        Self {
            turn: Side::Attacker,
            oil_count,
            sections,
            siege,
            attacker_hand,
            defender_hand,
            discard: Vector::new(),
            status: RoundStatus::InProgress,
            total_cards,
        }
    }

    /// Size of the full deck this match was dealt from.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Whether it is the attacker's turn.
    #[must_use]
    pub fn is_attackers_turn(&self) -> bool {
        self.turn == Side::Attacker
    }

    /// Hand belonging to `side`.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Attacker => &self.attacker_hand,
            Side::Defender => &self.defender_hand,
        }
    }

    /// Mutable hand belonging to `side`.
    pub fn hand_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Attacker => &mut self.attacker_hand,
            Side::Defender => &mut self.defender_hand,
        }
    }

    /// Whether the round has ended.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.status.is_over()
    }

    /// Number of damaged sections on the board.
    #[must_use]
    pub fn damaged_count(&self) -> usize {
        damaged_count(&self.sections)
    }

    /// Cards currently accounted for across every pile, hand and formation.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.siege.len()
            + self.attacker_hand.len()
            + self.defender_hand.len()
            + self.discard.len()
            + self.sections.iter().map(Section::card_count).sum::<usize>()
    }

    /// Verify card conservation, formation capacity and board layout.
    ///
    /// Never fails for a state produced by the engine. Intended for tests and
    /// for validating snapshots loaded from outside.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let count = self.card_count();
        if count != self.total_cards {
            return Err(EngineError::InvariantViolated(format!(
                "{} cards in play, deck has {}",
                count, self.total_cards
            )));
        }

        for (index, (section, kind)) in self.sections.iter().zip(LAYOUT).enumerate() {
            if section.kind != kind {
                return Err(EngineError::InvariantViolated(format!(
                    "section {} is a {}, layout expects a {}",
                    index, section.kind, kind
                )));
            }
            if section.attack.len() > section.capacity || section.defense.len() > section.capacity {
                return Err(EngineError::InvariantViolated(format!(
                    "section {} holds {}/{} cards against capacity {}",
                    index,
                    section.attack.len(),
                    section.defense.len(),
                    section.capacity
                )));
            }
        }

        let mut seen = FxHashSet::default();
        let all_cards = self
            .siege
            .iter()
            .chain(&self.attacker_hand)
            .chain(&self.defender_hand)
            .chain(self.discard.iter())
            .chain(self.sections.iter().flat_map(|s| s.attack.iter().chain(&s.defense)));
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(EngineError::InvariantViolated(format!(
                    "card {} appears more than once",
                    card
                )));
            }
        }

        Ok(())
    }

    /// Encode the state as opaque bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_bytes`.
    ///
    /// The decoded state is checked with `check_invariants` before it is
    /// returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.check_invariants()?;
        Ok(state)
    }
}

/// Count sections that have already been captured once.
#[must_use]
pub fn damaged_count(sections: &[Section]) -> usize {
    sections.iter().filter(|s| s.is_damaged).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionCatalog;

    fn sample_state() -> GameState {
        let siege: Vector<Card> = (0..3).map(|r| Card::new(0, r)).collect();
        let attacker = vec![Card::new(1, 0), Card::new(1, 1)];
        let defender = vec![Card::new(2, 0), Card::new(2, 1)];
        GameState::new(SectionCatalog::default().layout(), siege, attacker, defender, 3, 7)
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Attacker.opponent(), Side::Defender);
        assert_eq!(Side::Defender.opponent(), Side::Attacker);
    }

    #[test]
    fn test_new_state_defaults() {
        let state = sample_state();
        assert!(state.is_attackers_turn());
        assert_eq!(state.status, RoundStatus::InProgress);
        assert!(!state.is_round_over());
        assert!(state.discard.is_empty());
        assert_eq!(state.card_count(), 7);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_hand_by_side() {
        let mut state = sample_state();
        state.hand_mut(Side::Defender).clear();
        assert!(state.hand(Side::Defender).is_empty());
        assert_eq!(state.hand(Side::Attacker).len(), 2);
    }

    #[test]
    fn test_lost_card_detected() {
        let mut state = sample_state();
        state.attacker_hand.pop();
        assert!(matches!(
            state.check_invariants(),
            Err(EngineError::InvariantViolated(_))
        ));
    }

    #[test]
    fn test_duplicate_card_detected() {
        let mut state = sample_state();
        // Swap a card for a copy of another: count still matches.
        state.attacker_hand[1] = state.attacker_hand[0];
        assert!(state.check_invariants().is_err());
    }

    #[test]
    fn test_over_capacity_detected() {
        let mut state = sample_state();
        let cards: Vec<Card> = state.siege.iter().copied().collect();
        state.siege.clear();
        // Door holds two cards.
        state.sections[3].attack.extend(cards);
        assert_eq!(state.card_count(), 7);
        assert!(state.check_invariants().is_err());
    }

    #[test]
    fn test_moved_section_detected() {
        let mut state = sample_state();
        state.sections.swap(0, 3);
        assert!(state.check_invariants().is_err());
    }

    #[test]
    fn test_damaged_count() {
        let catalog = SectionCatalog::default();
        let mut state = sample_state();
        assert_eq!(state.damaged_count(), 0);

        state.sections[2] = catalog.get_section(state.sections[2].kind, true);
        state.sections[5] = catalog.get_section(state.sections[5].kind, true);
        assert_eq!(damaged_count(&state.sections), 2);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut state = sample_state();
        let card = state.attacker_hand.remove(0);
        state.sections[1].attack.push(card);
        state.turn = Side::Defender;

        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        let err = GameState::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, EngineError::Snapshot(_)));
    }

    #[test]
    fn test_snapshot_rejects_corrupt_state() {
        let mut state = sample_state();
        state.defender_hand.clear();
        let bytes = state.to_bytes().unwrap();
        assert!(matches!(
            GameState::from_bytes(&bytes),
            Err(EngineError::InvariantViolated(_))
        ));
    }
}
