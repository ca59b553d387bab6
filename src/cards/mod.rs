//! Card values: suits, ranks, and the packed byte encoding.
//!
//! ## Key Types
//!
//! - `Card`: Immutable value packing suit and rank into one byte
//! - `Suit`: The four suits plus the joker pseudo-suit
//! - `canonical_deck`: Fresh-deck iterator in canonical order
//!
//! Rank codes are plain bytes (`RANK_TWO..=RANK_ACE`) so comparators and
//! game rules can do arithmetic on them directly.

pub mod card;

pub use card::{
    canonical_deck, Card, Suit, MAX_JOKERS, RANK_ACE, RANK_JACK, RANK_KING, RANK_MASK, RANK_QUEEN,
    RANK_TEN, RANK_TWO, SUITED_CARDS, SUIT_MASK,
};
