//! Pile data structure: ordered card collections and their algorithms.
//!
//! ## Key Types
//!
//! - `Pile`: Arena-backed doubly-linked card collection
//! - `PileEnd`: Insertion end (top or bottom)
//! - `PilePick`: Removal/peek selector (top, bottom, or index)
//! - `SearchFlow` / `SearchOutcome`: Caller-driven search protocol
//!
//! Piles do not know who owns them; ownership is purely positional (a
//! pile lives inside a [`Deck`](crate::Deck) field).

pub mod pile;

pub use pile::{Pile, PileEnd, PilePick, SearchFlow, SearchOutcome};
