//! # cardpile
//!
//! A card-pile management engine: a deck of playing cards distributed
//! across named piles (a draw pile, a discard pile, and per-player
//! hands) with operations to move, inspect, order, and randomize cards
//! between them.
//!
//! ## Design Principles
//!
//! 1. **Piles are the engine**: The ordered, doubly-traversable pile and
//!    its algorithms (splice-based insertion sort, value-swap shuffle,
//!    mutation-safe search) carry all the weight; the deck is a thin,
//!    validating owner.
//!
//! 2. **Caller-driven traversal**: Dump, search, and sort take closures.
//!    A search visitor receives the collection it is walking and may
//!    remove cards mid-traversal without corrupting the cursor.
//!
//! 3. **Explicit randomness**: Shuffles draw from a seedable source the
//!    deck owns. Same seed, same game: tests and replays are exact.
//!
//! 4. **Errors are values**: Bad seats, empty piles, and range misses
//!    come back as typed errors before any card moves; nothing panics.
//!
//! ## Modules
//!
//! - `cards`: Card values, suits, ranks, and the packed byte encoding
//! - `pile`: The pile structure and its manipulation algorithms
//! - `deck`: The draw/discard/player pile group and cross-pile moves
//! - `rng`: Deterministic random source for shuffles and draws
//! - `error`: Typed, recoverable failure conditions

pub mod cards;
pub mod deck;
pub mod error;
pub mod pile;
pub mod rng;

// Re-export commonly used types
pub use crate::cards::{canonical_deck, Card, Suit};
pub use crate::deck::Deck;
pub use crate::error::{Error, Result};
pub use crate::pile::{Pile, PileEnd, PilePick, SearchFlow, SearchOutcome};
pub use crate::rng::{DeckRng, DeckRngState};
