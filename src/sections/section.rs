//! Wall sections and their formations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::state::Side;

/// Cards one side has committed to a section, in play order.
///
/// Inline storage covers the largest section capacity without allocating.
pub type Formation = SmallVec<[Card; 4]>;

/// The kind of battle position a section represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Pit,
    Tower,
    Wall,
    Door,
}

impl SectionKind {
    /// All kinds, in catalog order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Pit,
        SectionKind::Tower,
        SectionKind::Wall,
        SectionKind::Door,
    ];

    /// Dense index used by capacity tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SectionKind::Pit => 0,
            SectionKind::Tower => 1,
            SectionKind::Wall => 2,
            SectionKind::Door => 3,
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SectionKind::Pit => "Pit",
            SectionKind::Tower => "Tower",
            SectionKind::Wall => "Wall",
            SectionKind::Door => "Door",
        };
        f.write_str(name)
    }
}

/// One of the seven positions on the board.
///
/// A section's position is its index in `GameState::sections`; sections are
/// replaced in place when captured and never move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Kind of position.
    pub kind: SectionKind,

    /// Maximum cards per formation.
    pub capacity: usize,

    /// Attacker's formation.
    pub attack: Formation,

    /// Defender's formation.
    pub defense: Formation,

    /// Whether this section has already been captured once.
    pub is_damaged: bool,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(kind: SectionKind, capacity: usize, is_damaged: bool) -> Self {
        Self {
            kind,
            capacity,
            attack: Formation::new(),
            defense: Formation::new(),
            is_damaged,
        }
    }

    /// Formation belonging to `side`.
    #[must_use]
    pub fn formation(&self, side: Side) -> &Formation {
        match side {
            Side::Attacker => &self.attack,
            Side::Defender => &self.defense,
        }
    }

    /// Mutable formation belonging to `side`.
    pub fn formation_mut(&mut self, side: Side) -> &mut Formation {
        match side {
            Side::Attacker => &mut self.attack,
            Side::Defender => &mut self.defense,
        }
    }

    /// Whether `side` can commit no further cards here.
    #[must_use]
    pub fn is_full(&self, side: Side) -> bool {
        self.formation(side).len() >= self.capacity
    }

    /// Number of cards committed by both sides.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.attack.len() + self.defense.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_section_is_empty() {
        let section = Section::new(SectionKind::Tower, 4, false);
        assert!(section.attack.is_empty());
        assert!(section.defense.is_empty());
        assert_eq!(section.card_count(), 0);
        assert!(!section.is_full(Side::Attacker));
    }

    #[test]
    fn test_formation_by_side() {
        let mut section = Section::new(SectionKind::Door, 2, false);
        section.formation_mut(Side::Attacker).push(Card::new(0, 1));
        section.formation_mut(Side::Attacker).push(Card::new(0, 2));
        section.formation_mut(Side::Defender).push(Card::new(1, 1));

        assert!(section.is_full(Side::Attacker));
        assert!(!section.is_full(Side::Defender));
        assert_eq!(section.defense.as_slice(), &[Card::new(1, 1)]);
        assert_eq!(section.card_count(), 3);
    }

    #[test]
    fn test_kind_indices_are_dense() {
        for (i, kind) in SectionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
