//! Match configuration.
//!
//! `GameConfig` is a plain value passed into the engine. Nothing in the
//! crate reads configuration from globals or the environment.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Configuration for one match.
///
/// ## Defaults
///
/// - 5 suits of 12 ranks (60 cards)
/// - 6 cards per hand
/// - 3 oil, removing the first attacking card of a formation
/// - seed 0
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of suits in the deck.
    pub suit_count: u8,

    /// Number of ranks per suit. Ranks run `0..rank_count`.
    pub rank_count: u8,

    /// Cards dealt to each side at creation.
    pub hand_size: usize,

    /// Oil available to the defender.
    pub oil_count: u32,

    /// Position within an attack formation removed by oil.
    pub oil_index: usize,

    /// Seed for the deck shuffle.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suit_count: 5,
            rank_count: 12,
            hand_size: 6,
            oil_count: 3,
            oil_index: 0,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of suits.
    #[must_use]
    pub fn with_suits(mut self, suit_count: u8) -> Self {
        self.suit_count = suit_count;
        self
    }

    /// Set the number of ranks per suit.
    #[must_use]
    pub fn with_ranks(mut self, rank_count: u8) -> Self {
        self.rank_count = rank_count;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the starting oil count.
    #[must_use]
    pub fn with_oil(mut self, oil_count: u32) -> Self {
        self.oil_count = oil_count;
        self
    }

    /// Set the formation position removed by oil.
    #[must_use]
    pub fn with_oil_index(mut self, oil_index: usize) -> Self {
        self.oil_index = oil_index;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        usize::from(self.suit_count) * usize::from(self.rank_count)
    }

    /// Check that a game can be created from this configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.suit_count == 0 || self.rank_count == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "deck needs at least one suit and one rank (got {} suits, {} ranks)",
                self.suit_count, self.rank_count
            )));
        }
        if self.deck_size() < 2 * self.hand_size {
            return Err(EngineError::InvalidConfig(format!(
                "{} cards cannot deal two hands of {}",
                self.deck_size(),
                self.hand_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.deck_size(), 60);
        assert_eq!(config.hand_size, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_suits(6)
            .with_ranks(9)
            .with_hand_size(6)
            .with_oil(2)
            .with_oil_index(1)
            .with_seed(99);

        assert_eq!(config.deck_size(), 54);
        assert_eq!(config.oil_count, 2);
        assert_eq!(config.oil_index, 1);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_exact_fit_is_valid() {
        let config = GameConfig::new().with_suits(2).with_ranks(3).with_hand_size(3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_small_deck_rejected() {
        let config = GameConfig::new().with_suits(1).with_ranks(5).with_hand_size(3);
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_deck_rejected() {
        let config = GameConfig::new().with_suits(0).with_hand_size(0);
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_seed(7).with_oil(1);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
