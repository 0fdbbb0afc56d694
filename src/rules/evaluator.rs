//! Formation evaluator trait.
//!
//! The engine decides *when* a section falls; an evaluator decides *whether*
//! a section currently favors the defender. Swapping evaluators changes the
//! combo rules without touching turn or control logic.

use crate::cards::Card;
use crate::sections::Section;

/// Strategy comparing the two formations of a section.
///
/// ## Implementation Notes
///
/// - Both methods must be pure and deterministic: the engine may call them
///   any number of times per move.
/// - `sort_formation` must be a total order so the extra pool handed to
///   `can_defend` is the same for the same set of cards.
pub trait FormationEvaluator {
    /// Put `cards` into canonical order.
    fn sort_formation(&self, cards: &mut [Card]);

    /// Whether `section` currently favors the defender.
    ///
    /// `extra` holds every card the defender could still receive: the
    /// defender's hand followed by the siege deck, canonically sorted.
    fn can_defend(&self, section: &Section, extra: &[Card]) -> bool;
}
