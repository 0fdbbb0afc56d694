//! Board sections and the catalog that produces them.

pub mod catalog;
pub mod section;

pub use catalog::{SectionCatalog, LAYOUT, SECTION_COUNT};
pub use section::{Formation, Section, SectionKind};
