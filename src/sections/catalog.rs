//! Section catalog: builds sections from a capacity table.
//!
//! The catalog is the only place that knows how many cards each kind of
//! section holds, intact or damaged. The engine asks it for the opening
//! layout and for the damaged replacement when a section falls.

use super::section::{Section, SectionKind};

/// Number of sections on the board.
pub const SECTION_COUNT: usize = 7;

/// Fixed left-to-right board layout.
pub const LAYOUT: [SectionKind; SECTION_COUNT] = [
    SectionKind::Pit,
    SectionKind::Tower,
    SectionKind::Wall,
    SectionKind::Door,
    SectionKind::Wall,
    SectionKind::Tower,
    SectionKind::Pit,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Capacity {
    intact: usize,
    damaged: usize,
}

/// Capacity table for every section kind.
///
/// ## Default table
///
/// | kind  | intact | damaged |
/// |-------|--------|---------|
/// | Pit   | 3      | 2       |
/// | Tower | 4      | 3       |
/// | Wall  | 3      | 2       |
/// | Door  | 2      | 1       |
///
/// ```
/// use rust_siege::sections::{SectionCatalog, SectionKind};
///
/// let catalog = SectionCatalog::default().with_capacity(SectionKind::Door, 3, 2);
/// let door = catalog.get_section(SectionKind::Door, true);
/// assert_eq!(door.capacity, 2);
/// assert!(door.is_damaged);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCatalog {
    capacities: [Capacity; 4],
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            capacities: [
                Capacity { intact: 3, damaged: 2 },
                Capacity { intact: 4, damaged: 3 },
                Capacity { intact: 3, damaged: 2 },
                Capacity { intact: 2, damaged: 1 },
            ],
        }
    }
}

impl SectionCatalog {
    /// Create the default catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the capacities of one kind.
    #[must_use]
    pub fn with_capacity(mut self, kind: SectionKind, intact: usize, damaged: usize) -> Self {
        assert!(intact > 0, "Sections must hold at least one card");
        self.capacities[kind.index()] = Capacity { intact, damaged };
        self
    }

    /// Capacity of `kind` in the requested state.
    #[must_use]
    pub fn capacity(&self, kind: SectionKind, damaged: bool) -> usize {
        let capacity = self.capacities[kind.index()];
        if damaged {
            capacity.damaged
        } else {
            capacity.intact
        }
    }

    /// A fresh, empty section of `kind`.
    #[must_use]
    pub fn get_section(&self, kind: SectionKind, damaged: bool) -> Section {
        Section::new(kind, self.capacity(kind, damaged), damaged)
    }

    /// The opening board: every section intact, in `LAYOUT` order.
    #[must_use]
    pub fn layout(&self) -> [Section; SECTION_COUNT] {
        LAYOUT.map(|kind| self.get_section(kind, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacities() {
        let catalog = SectionCatalog::default();
        assert_eq!(catalog.capacity(SectionKind::Pit, false), 3);
        assert_eq!(catalog.capacity(SectionKind::Tower, false), 4);
        assert_eq!(catalog.capacity(SectionKind::Wall, false), 3);
        assert_eq!(catalog.capacity(SectionKind::Door, false), 2);
    }

    #[test]
    fn test_damaged_variant_is_smaller() {
        let catalog = SectionCatalog::default();
        for kind in SectionKind::ALL {
            let intact = catalog.get_section(kind, false);
            let damaged = catalog.get_section(kind, true);

            assert!(!intact.is_damaged);
            assert!(damaged.is_damaged);
            assert_eq!(damaged.kind, kind);
            assert!(damaged.capacity < intact.capacity);
        }
    }

    #[test]
    fn test_layout_order() {
        let layout = SectionCatalog::default().layout();
        let kinds: Vec<_> = layout.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, LAYOUT.to_vec());
        assert!(layout.iter().all(|s| s.card_count() == 0 && !s.is_damaged));
    }

    #[test]
    fn test_custom_capacity() {
        let catalog = SectionCatalog::default().with_capacity(SectionKind::Wall, 5, 4);
        assert_eq!(catalog.get_section(SectionKind::Wall, false).capacity, 5);
        assert_eq!(catalog.get_section(SectionKind::Wall, true).capacity, 4);
        assert_eq!(catalog.get_section(SectionKind::Pit, false).capacity, 3);
    }

    #[test]
    #[should_panic(expected = "Sections must hold at least one card")]
    fn test_zero_capacity_rejected() {
        let _ = SectionCatalog::default().with_capacity(SectionKind::Pit, 0, 0);
    }
}
