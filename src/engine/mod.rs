//! Turn progression and section control.
//!
//! `SiegeEngine` owns every rule that moves cards: plays, draws, retreats,
//! oil, and captures. Whether a section favors the defender is delegated to
//! the injected `FormationEvaluator`.

mod machine;

pub use machine::{Play, SiegeEngine, MAX_DAMAGED_SECTIONS};
