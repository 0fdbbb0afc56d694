//! Core engine types: configuration, errors, RNG, state.
//!
//! This module holds the building blocks shared by every other module.
//! Game rules live in `engine` and `rules`; nothing here decides a move.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::{EngineError, ErrorKind};
pub use rng::GameRng;
pub use state::{damaged_count, GameState, RoundStatus, Side};
