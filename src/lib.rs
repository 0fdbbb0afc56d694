//! # rust-siege
//!
//! A deterministic rules engine for a two-sided siege card game.
//!
//! An attacker and a defender take turns committing cards to seven wall
//! sections. The engine enforces formation capacity, draws, oil, retreats,
//! and section capture with escalating damage: the defender may lose up to
//! three sections, but a fourth loss, or a second loss on a damaged
//! section, sweeps the wall and ends the round.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A seed fixes the deck; every operation after that
//!    is a pure function of the state and its arguments.
//!
//! 2. **Pluggable rules**: Combo comparison lives behind
//!    `FormationEvaluator`, so rule changes never touch turn logic.
//!
//! 3. **Opaque state**: Callers own `GameState` and persist it however they
//!    like; the engine holds no per-match data.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, game state
//! - `cards`: Cards and deck primitives
//! - `sections`: Sections and the section catalog
//! - `rules`: Formation evaluator trait and default combo rules
//! - `engine`: The turn/control state machine

pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;
pub mod sections;

// Re-export commonly used types
pub use crate::core::{
    damaged_count, EngineError, ErrorKind, GameConfig, GameRng, GameState, RoundStatus, Side,
};

pub use crate::cards::{create_deck, draw_card, Card};

pub use crate::sections::{Formation, Section, SectionCatalog, SectionKind, LAYOUT, SECTION_COUNT};

pub use crate::rules::{ComboCategory, ComboEvaluator, FormationEvaluator, Strength};

pub use crate::engine::{Play, SiegeEngine, MAX_DAMAGED_SECTIONS};
