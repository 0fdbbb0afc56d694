//! The siege state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{create_deck, draw_card, Card};
use crate::core::{EngineError, GameConfig, GameRng, GameState, RoundStatus, Side};
use crate::rules::{ComboEvaluator, FormationEvaluator};
use crate::sections::{SectionCatalog, SECTION_COUNT};

/// Damaged sections the defender can absorb before any further loss sweeps
/// the wall.
pub const MAX_DAMAGED_SECTIONS: usize = 3;

/// A move accepted by `play_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    /// Target section.
    pub section: usize,
    /// Card position in the active side's hand.
    pub hand_index: usize,
}

/// Rules engine for one match configuration.
///
/// The engine itself is immutable: every operation takes the match's
/// `GameState` by reference, so one engine can drive any number of matches.
///
/// ```
/// use rust_siege::{GameConfig, RoundStatus, SiegeEngine};
///
/// let engine = SiegeEngine::new(GameConfig::default().with_seed(7)).unwrap();
/// let mut state = engine.create_game().unwrap();
///
/// let status = engine.play_card(&mut state, 3, 0).unwrap();
/// assert_eq!(status, RoundStatus::InProgress);
/// assert!(!state.is_attackers_turn());
/// ```
#[derive(Clone, Debug)]
pub struct SiegeEngine<E = ComboEvaluator> {
    config: GameConfig,
    catalog: SectionCatalog,
    evaluator: E,
}

impl SiegeEngine {
    /// Create an engine with the default combo rules.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_evaluator(config, ComboEvaluator)
    }
}

impl<E: FormationEvaluator> SiegeEngine<E> {
    /// Create an engine with a custom evaluator.
    pub fn with_evaluator(config: GameConfig, evaluator: E) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: SectionCatalog::default(),
            evaluator,
        })
    }

    /// Replace the section catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: SectionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the section catalog.
    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    /// Get the evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Build the opening state: shuffled deck, two dealt hands, an intact
    /// board, full oil, attacker to move.
    pub fn create_game(&self) -> Result<GameState, EngineError> {
        let config = &self.config;
        let mut rng = GameRng::new(config.seed).for_context("siege");
        let mut siege = create_deck(config.suit_count, config.rank_count, &mut rng);

        let mut attacker_hand = Vec::with_capacity(config.hand_size);
        let mut defender_hand = Vec::with_capacity(config.hand_size);
        for _ in 0..config.hand_size {
            attacker_hand.push(draw_card(&mut siege)?);
            defender_hand.push(draw_card(&mut siege)?);
        }

        let state = GameState::new(
            self.catalog.layout(),
            siege,
            attacker_hand,
            defender_hand,
            config.oil_count,
            config.deck_size(),
        );
        debug!(seed = config.seed, siege = state.siege.len(), "game created");
        Ok(state)
    }

    /// Commit a card from the active side's hand to a section.
    ///
    /// After the card lands, control is checked. A sweep ends the round and
    /// discards the attacker's hand. Otherwise, an attacker play with the
    /// siege deck empty ends the round and discards the defender's hand.
    /// Otherwise the player draws one card if any remain and the turn passes.
    ///
    /// Rejected moves leave `state` untouched.
    pub fn play_card(
        &self,
        state: &mut GameState,
        section_index: usize,
        hand_index: usize,
    ) -> Result<RoundStatus, EngineError> {
        if state.is_round_over() {
            return Err(rejected(EngineError::RoundOver));
        }
        check_section_index(section_index)?;

        let side = state.turn;
        let section = &state.sections[section_index];
        if section.is_full(side) {
            return Err(rejected(EngineError::FormationFull {
                section: section_index,
                capacity: section.capacity,
            }));
        }
        let hand_len = state.hand(side).len();
        if hand_index >= hand_len {
            return Err(rejected(EngineError::InvalidHandIndex {
                index: hand_index,
                len: hand_len,
            }));
        }

        let card = state.hand_mut(side).remove(hand_index);
        state.sections[section_index].formation_mut(side).push(card);
        debug!(%side, section = section_index, %card, "card played");

        if self.check_control(state) {
            let hand = std::mem::take(&mut state.attacker_hand);
            state.discard.extend(hand);
            state.status = RoundStatus::Swept;
            info!(damaged = state.damaged_count(), "wall swept, round over");
            return Ok(state.status);
        }

        if side == Side::Attacker && state.siege.is_empty() {
            let hand = std::mem::take(&mut state.defender_hand);
            state.discard.extend(hand);
            state.status = RoundStatus::SiegeExhausted;
            info!("siege deck exhausted, round over");
            return Ok(state.status);
        }

        if !state.siege.is_empty() {
            let drawn = draw_card(&mut state.siege)?;
            state.hand_mut(side).push(drawn);
        }
        state.turn = side.opponent();

        Ok(state.status)
    }

    /// Withdraw every attacking card from a section to the discard pile.
    ///
    /// Does nothing if the attack formation is empty. Turn and hands are
    /// unaffected.
    pub fn retreat(&self, state: &mut GameState, section_index: usize) -> Result<(), EngineError> {
        check_section_index(section_index)?;

        let cards = std::mem::take(&mut state.sections[section_index].attack);
        if !cards.is_empty() {
            debug!(section = section_index, cards = cards.len(), "attacker retreated");
        }
        state.discard.extend(cards);
        Ok(())
    }

    /// Pour oil on a section, discarding the attacking card at the configured
    /// oil index.
    ///
    /// Returns the removed card.
    pub fn use_oil(&self, state: &mut GameState, section_index: usize) -> Result<Card, EngineError> {
        check_section_index(section_index)?;

        let oil_index = self.config.oil_index;
        let len = state.sections[section_index].attack.len();
        if oil_index >= len {
            return Err(rejected(EngineError::IndexOutOfRange { index: oil_index, len }));
        }
        if state.oil_count == 0 {
            return Err(rejected(EngineError::OilExhausted));
        }

        let card = state.sections[section_index].attack.remove(oil_index);
        state.discard.push_back(card);
        state.oil_count -= 1;
        debug!(section = section_index, %card, oil = state.oil_count, "oil used");
        Ok(card)
    }

    /// Resolve control of every section, left to right.
    ///
    /// A section the defender can no longer hold is captured: both
    /// formations are discarded and it is replaced by its damaged variant.
    /// Returns `true` (a sweep) as soon as a section falls that is already
    /// damaged, or when `MAX_DAMAGED_SECTIONS` are already damaged; sections
    /// further right are not inspected.
    pub fn check_control(&self, state: &mut GameState) -> bool {
        let mut extra: Vec<Card> = state
            .defender_hand
            .iter()
            .chain(state.siege.iter())
            .copied()
            .collect();
        self.evaluator.sort_formation(&mut extra);

        for index in 0..SECTION_COUNT {
            if self.evaluator.can_defend(&state.sections[index], &extra) {
                continue;
            }
            if state.sections[index].is_damaged || state.damaged_count() >= MAX_DAMAGED_SECTIONS {
                debug!(section = index, "decisive section loss");
                return true;
            }

            let kind = state.sections[index].kind;
            let fallen = std::mem::replace(
                &mut state.sections[index],
                self.catalog.get_section(kind, true),
            );
            state.discard.extend(fallen.attack);
            state.discard.extend(fallen.defense);
            debug!(section = index, %kind, damaged = state.damaged_count(), "section captured");
        }
        false
    }

    /// Every move `play_card` would accept for the side to move.
    #[must_use]
    pub fn legal_plays(&self, state: &GameState) -> Vec<Play> {
        if state.is_round_over() {
            return Vec::new();
        }
        let side = state.turn;
        let hand_len = state.hand(side).len();
        state
            .sections
            .iter()
            .enumerate()
            .filter(|(_, section)| !section.is_full(side))
            .flat_map(|(section, _)| (0..hand_len).map(move |hand_index| Play { section, hand_index }))
            .collect()
    }
}

fn check_section_index(index: usize) -> Result<(), EngineError> {
    if index >= SECTION_COUNT {
        return Err(rejected(EngineError::InvalidSectionIndex {
            index,
            len: SECTION_COUNT,
        }));
    }
    Ok(())
}

fn rejected(err: EngineError) -> EngineError {
    warn!(error = %err, "move rejected");
    err
}
