//! Deck system: the pile group and every cross-pile operation.
//!
//! ## Key Types
//!
//! - `Deck`: Owns the draw pile, the discard pile, and the player piles
//!
//! The deck validates seats and source piles before delegating to the
//! pile primitives, so a failed call never leaves a card half-moved.

pub mod deck;

pub use deck::Deck;
