//! Engine error types.
//!
//! Every fallible operation returns a typed, recoverable [`Error`]; the
//! engine never aborts and never partially mutates state before failing
//! (all checks run before the first card moves).

use thiserror::Error;

/// Errors reported by pile and deck operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The source pile has no cards.
    #[error("pile has no cards")]
    EmptyPile,

    /// A positional selector pointed past the end of the pile.
    #[error("index {index} is out of range for a pile of {len} cards")]
    IndexOutOfRange {
        /// The requested index, counted from the top.
        index: usize,
        /// The pile's card count at the time of the call.
        len: usize,
    },

    /// A player number outside `1..=player_count`.
    #[error("player {player} is out of range for a table of {count} players")]
    BadPlayer {
        /// The offending player number (1-based).
        player: usize,
        /// How many players the deck was created with.
        count: usize,
    },

    /// The discard pile already holds the whole deck.
    ///
    /// Unreachable while card conservation holds, but checked anyway so a
    /// conservation bug surfaces as an error instead of silent growth.
    #[error("discard pile already holds all {capacity} cards")]
    DiscardFull {
        /// Total number of cards the deck owns.
        capacity: usize,
    },

    /// More jokers requested than the card encoding can represent.
    #[error("{requested} jokers cannot be encoded, at most {max} fit the rank nibble")]
    TooManyJokers {
        /// The requested joker count.
        requested: usize,
        /// The largest representable joker ordinal.
        max: usize,
    },
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, Error>;
