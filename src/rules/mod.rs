//! Formation rules.
//!
//! `FormationEvaluator` is the seam between the state machine and the combo
//! rules. The engine calls into it but never interprets combos directly.

pub mod combo;
pub mod evaluator;

pub use combo::{strength, ComboCategory, ComboEvaluator, Strength};
pub use evaluator::FormationEvaluator;
