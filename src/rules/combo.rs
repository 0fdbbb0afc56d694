//! Default combo rules.
//!
//! A formation's strength is its combo category, then its rank sum.
//! Categories from weakest to strongest:
//!
//! | category  | cards                            |
//! |-----------|----------------------------------|
//! | Sum       | anything                         |
//! | Run       | consecutive ranks                |
//! | Color     | one suit                         |
//! | SameRank  | one rank                         |
//! | ColorRun  | consecutive ranks of one suit    |
//!
//! Ties favor the defender.

use serde::{Deserialize, Serialize};

use super::evaluator::FormationEvaluator;
use crate::cards::Card;
use crate::sections::Section;

/// Combo category, ordered weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComboCategory {
    Sum,
    Run,
    Color,
    SameRank,
    ColorRun,
}

/// Comparable strength of a formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Strength {
    pub category: ComboCategory,
    pub sum: u32,
}

/// Strength of a set of cards.
///
/// Fewer than two cards never form a pattern and rate as `Sum`.
#[must_use]
pub fn strength(cards: &[Card]) -> Strength {
    let sum = cards.iter().map(|c| u32::from(c.rank)).sum();
    let category = if cards.len() < 2 {
        ComboCategory::Sum
    } else {
        let same_suit = cards.iter().all(|c| c.suit == cards[0].suit);
        let same_rank = cards.iter().all(|c| c.rank == cards[0].rank);
        match (is_run(cards), same_suit, same_rank) {
            (true, true, _) => ComboCategory::ColorRun,
            (_, _, true) => ComboCategory::SameRank,
            (_, true, _) => ComboCategory::Color,
            (true, false, _) => ComboCategory::Run,
            _ => ComboCategory::Sum,
        }
    };
    Strength { category, sum }
}

/// Distinct ranks spanning exactly `len` values.
fn is_run(cards: &[Card]) -> bool {
    let min = cards.iter().map(|c| c.rank).min().unwrap_or(0);
    let max = cards.iter().map(|c| c.rank).max().unwrap_or(0);
    let distinct = cards
        .iter()
        .enumerate()
        .all(|(i, a)| cards[i + 1..].iter().all(|b| b.rank != a.rank));
    distinct && usize::from(max - min) + 1 == cards.len()
}

/// Evaluator implementing the default combo rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComboEvaluator;

impl ComboEvaluator {
    /// Create the evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FormationEvaluator for ComboEvaluator {
    /// Highest rank first, ties broken by suit.
    fn sort_formation(&self, cards: &mut [Card]) {
        cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit)));
    }

    fn can_defend(&self, section: &Section, extra: &[Card]) -> bool {
        // The attacker cannot claim a section before finishing a formation.
        if section.attack.len() < section.capacity {
            return true;
        }

        let target = strength(&section.attack);
        let need = section.capacity.saturating_sub(section.defense.len());
        if need > extra.len() {
            return false;
        }

        let mut formation: Vec<Card> = section.defense.to_vec();
        reaches(&mut formation, extra, need, target)
    }
}

/// Whether some choice of `need` cards from `pool` lifts `formation` to at
/// least `target`.
///
/// The pool arrives strongest first, so strong completions are tried early
/// and the search usually stops after a handful of candidates.
fn reaches(formation: &mut Vec<Card>, pool: &[Card], need: usize, target: Strength) -> bool {
    if need == 0 {
        return strength(formation) >= target;
    }
    for (i, &card) in pool.iter().enumerate() {
        if pool.len() - i < need {
            break;
        }
        formation.push(card);
        let hit = reaches(formation, &pool[i + 1..], need - 1, target);
        formation.pop();
        if hit {
            return true;
        }
    }
    false
}
