//! Card values and their packed encoding.
//!
//! A [`Card`] packs its two attributes into disjoint bit ranges of one
//! byte: the suit lives in the high nibble, the rank (or joker ordinal)
//! in the low nibble. The projections are pure masks, so
//! `rank = value & RANK_MASK` and `suit = value & SUIT_MASK` always
//! recover the original fields, and no two distinct (suit, rank) pairs
//! share an encoding.
//!
//! ## Usage
//!
//! ```
//! use cardpile::cards::{Card, Suit, RANK_ACE, RANK_QUEEN};
//!
//! let ace = Card::new(Suit::Spade, RANK_ACE);
//! assert_eq!(ace.suit(), Suit::Spade);
//! assert_eq!(ace.rank(), RANK_ACE);
//!
//! let queen = Card::new(Suit::Heart, RANK_QUEEN);
//! assert_ne!(ace, queen);
//! ```

use serde::{Deserialize, Serialize};

/// Bit range holding the suit.
pub const SUIT_MASK: u8 = 0xF0;
/// Bit range holding the rank or joker ordinal.
pub const RANK_MASK: u8 = 0x0F;

/// Rank code for a two. Threes through tens follow contiguously.
pub const RANK_TWO: u8 = 0x02;
/// Rank code for a ten.
pub const RANK_TEN: u8 = 0x0A;
/// Rank code for a jack.
pub const RANK_JACK: u8 = 0x0B;
/// Rank code for a queen.
pub const RANK_QUEEN: u8 = 0x0C;
/// Rank code for a king.
pub const RANK_KING: u8 = 0x0D;
/// Rank code for an ace. Aces rank high.
pub const RANK_ACE: u8 = 0x0E;

/// Number of suited cards in a deck without jokers.
pub const SUITED_CARDS: usize = 52;

/// Largest joker ordinal the rank nibble can hold.
pub const MAX_JOKERS: usize = RANK_MASK as usize;

/// Card suit, including the joker pseudo-suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades, the highest-priority suit.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Jokers; the rank nibble holds an ordinal instead of a rank.
    Joker,
}

impl Suit {
    /// The four ordinary suits in canonical deck order.
    pub const SUITED: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// The suit's code in the high nibble of a card value.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Suit::Spade => 0x50,
            Suit::Heart => 0x40,
            Suit::Diamond => 0x30,
            Suit::Club => 0x20,
            Suit::Joker => 0x10,
        }
    }

    /// One-letter tag used when dumping piles.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Joker => 'J',
        }
    }
}

/// An immutable card value.
///
/// Cards compare for equality by raw encoded value; once created, only a
/// card's pile membership and position change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card from a suit and a rank (or joker ordinal).
    ///
    /// The rank is masked into the low nibble; callers pass one of the
    /// `RANK_*` constants or a joker ordinal in `1..=MAX_JOKERS`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self(suit.code() | (rank & RANK_MASK))
    }

    /// The suit, recovered from the high nibble.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 & SUIT_MASK {
            0x50 => Suit::Spade,
            0x40 => Suit::Heart,
            0x30 => Suit::Diamond,
            0x20 => Suit::Club,
            _ => Suit::Joker,
        }
    }

    /// The rank (or joker ordinal), recovered from the low nibble.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 & RANK_MASK
    }

    /// Whether this card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.0 & SUIT_MASK == Suit::Joker.code()
    }

    /// The raw encoded value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-", self.suit().tag())?;
        if self.is_joker() {
            return write!(f, "{}", self.rank());
        }
        match self.rank() {
            RANK_ACE => write!(f, "A"),
            RANK_KING => write!(f, "K"),
            RANK_QUEEN => write!(f, "Q"),
            RANK_JACK => write!(f, "J"),
            rank => write!(f, "{rank}"),
        }
    }
}

/// Iterate a fresh deck in canonical order.
///
/// Yields Spade A,2..K, Heart A,2..K, Diamond A,2..K, Club A,2..K, then
/// jokers with ordinals `1..=joker_count`. Ordinals past [`MAX_JOKERS`]
/// collide with suited encodings; [`Deck::new`](crate::Deck::new)
/// rejects such counts before calling this.
pub fn canonical_deck(joker_count: usize) -> impl Iterator<Item = Card> {
    let suited = Suit::SUITED.into_iter().flat_map(|suit| {
        std::iter::once(Card::new(suit, RANK_ACE))
            .chain((RANK_TWO..=RANK_KING).map(move |rank| Card::new(suit, rank)))
    });
    let jokers = (1..=joker_count).map(|ordinal| Card::new(Suit::Joker, ordinal as u8));
    suited.chain(jokers)
}
