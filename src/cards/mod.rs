//! Cards and the siege deck.
//!
//! ## Key Types
//!
//! - `Card`: immutable `(suit, rank)` pair
//! - `create_deck` / `draw_card`: deck construction and draw primitives

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::{create_deck, draw_card};
