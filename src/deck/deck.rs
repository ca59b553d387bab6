//! The deck: one draw pile, one discard pile, and the player piles.
//!
//! Every cross-pile operation is mediated here: player numbers and
//! source piles are validated before the first card moves, and the
//! conservation identity (draw + discard + player piles == total) is
//! debug-asserted after each move so a violation surfaces in tests
//! rather than being masked by the discard capacity guard.

use std::cmp::Ordering;

use crate::cards::{canonical_deck, Card, MAX_JOKERS, SUITED_CARDS};
use crate::error::{Error, Result};
use crate::pile::{Pile, PileEnd, PilePick, SearchFlow, SearchOutcome};
use crate::rng::DeckRng;

/// Which pile a deck-level traversal walks.
#[derive(Clone, Copy)]
enum Target {
    Draw,
    Discard,
    Player(usize),
}

/// A deck of cards distributed across named piles.
///
/// Created with a fixed player count and joker count; every card the
/// deck owns lives in exactly one pile at any instant, and no operation
/// after construction creates or destroys a card.
///
/// Player numbers in the public API are 1-based (`1..=player_count`),
/// matching how seats are spoken about at a table.
///
/// ## Usage
///
/// ```
/// use cardpile::{Deck, DeckRng, PilePick};
///
/// let mut deck = Deck::with_rng(4, 1, DeckRng::new(42))?;
/// assert_eq!(deck.total_count(), 53);
///
/// deck.shuffle_draw();
/// deck.deal(PilePick::Top, 1)?;
/// assert_eq!(deck.player_card_count(1)?, 1);
/// assert_eq!(deck.draw_count(), 52);
/// # Ok::<(), cardpile::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    draw: Pile,
    discard: Pile,
    players: Vec<Pile>,
    total: usize,
    jokers: usize,
    rng: DeckRng,
}

impl Deck {
    /// Create a deck with an entropy-seeded random source.
    ///
    /// The draw pile holds all `52 + joker_count` cards in canonical
    /// order (Spade A,2..K, Heart, Diamond, Club, then jokers); the
    /// discard pile and all `player_count` player piles start empty.
    /// Zero players and zero jokers are both valid.
    pub fn new(player_count: usize, joker_count: usize) -> Result<Self> {
        Self::with_rng(player_count, joker_count, DeckRng::from_entropy())
    }

    /// Create a deck with an explicit random source.
    ///
    /// Decks built from the same seed play out identically; tests and
    /// replays construct their [`DeckRng`] with a fixed seed.
    pub fn with_rng(player_count: usize, joker_count: usize, rng: DeckRng) -> Result<Self> {
        if joker_count > MAX_JOKERS {
            return Err(Error::TooManyJokers {
                requested: joker_count,
                max: MAX_JOKERS,
            });
        }

        let mut draw = Pile::new();
        for card in canonical_deck(joker_count) {
            draw.insert(card, PileEnd::Bottom);
        }

        Ok(Self {
            draw,
            discard: Pile::new(),
            players: (0..player_count).map(|_| Pile::new()).collect(),
            total: SUITED_CARDS + joker_count,
            jokers: joker_count,
            rng,
        })
    }

    /// Total number of cards the deck owns. O(1).
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Number of jokers the deck was created with. O(1).
    #[must_use]
    pub fn joker_count(&self) -> usize {
        self.jokers
    }

    /// Number of players the deck was created with. O(1).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Cards currently in the draw pile. O(1).
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw.len()
    }

    /// Cards currently in the discard pile. O(1).
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Cards currently in a player's pile. O(1).
    pub fn player_card_count(&self, player_no: usize) -> Result<usize> {
        Ok(self.players[self.player_index(player_no)?].len())
    }

    /// The deck's random source.
    ///
    /// Exposed so a driver drawing random cards shares the stream the
    /// shuffles consume; one seed then reproduces the whole game.
    pub fn rng_mut(&mut self) -> &mut DeckRng {
        &mut self.rng
    }

    /// Read a card from the draw pile without moving it.
    pub fn peek_draw(&self, pick: PilePick) -> Result<Card> {
        self.draw.peek(pick)
    }

    /// Read a card from the discard pile without moving it.
    pub fn peek_discard(&self, pick: PilePick) -> Result<Card> {
        self.discard.peek(pick)
    }

    /// Read a card from a player's pile without moving it.
    pub fn peek_player(&self, player_no: usize, pick: PilePick) -> Result<Card> {
        self.players[self.player_index(player_no)?].peek(pick)
    }

    /// Move one card from the draw pile to the bottom of a player's
    /// pile.
    ///
    /// Fails with [`Error::BadPlayer`] on a bad seat, and with the draw
    /// pile's own error if it is empty or the selector is out of range.
    pub fn deal(&mut self, pick: PilePick, player_no: usize) -> Result<()> {
        let ix = self.player_index(player_no)?;
        let card = self.draw.remove(pick)?;
        self.players[ix].insert(card, PileEnd::Bottom);
        self.debug_assert_conserved();
        Ok(())
    }

    /// Move one card from a player's pile to the bottom of another's.
    ///
    /// Both seats are validated before any card moves; transferring to
    /// the same seat re-files the card at the bottom of that pile.
    pub fn transfer(&mut self, pick: PilePick, from_player: usize, to_player: usize) -> Result<()> {
        let from = self.player_index(from_player)?;
        let to = self.player_index(to_player)?;
        let card = self.players[from].remove(pick)?;
        self.players[to].insert(card, PileEnd::Bottom);
        self.debug_assert_conserved();
        Ok(())
    }

    /// Move one card from the draw pile to the bottom of the discard
    /// pile.
    pub fn discard_from_draw(&mut self, pick: PilePick) -> Result<()> {
        self.check_discard_capacity()?;
        let card = self.draw.remove(pick)?;
        self.discard.insert(card, PileEnd::Bottom);
        self.debug_assert_conserved();
        Ok(())
    }

    /// Move one card from a player's pile to the bottom of the discard
    /// pile.
    pub fn discard_from_player(&mut self, player_no: usize, pick: PilePick) -> Result<()> {
        let ix = self.player_index(player_no)?;
        self.check_discard_capacity()?;
        let card = self.players[ix].remove(pick)?;
        self.discard.insert(card, PileEnd::Bottom);
        self.debug_assert_conserved();
        Ok(())
    }

    /// Visit every draw-pile card from top to bottom.
    pub fn dump_draw<F>(&self, visit: F)
    where
        F: FnMut(usize, Card),
    {
        self.draw.dump(visit);
    }

    /// Visit every discard-pile card from top to bottom.
    pub fn dump_discard<F>(&self, visit: F)
    where
        F: FnMut(usize, Card),
    {
        self.discard.dump(visit);
    }

    /// Visit every card in a player's pile from top to bottom.
    pub fn dump_player<F>(&self, player_no: usize, visit: F) -> Result<()>
    where
        F: FnMut(usize, Card),
    {
        self.players[self.player_index(player_no)?].dump(visit);
        Ok(())
    }

    /// Search the draw pile, stopping at the first card the visitor
    /// reports [`SearchFlow::Found`] on.
    ///
    /// The visitor receives the whole deck, so it may discard, transfer,
    /// or nested-search while the traversal is in flight; removal of any
    /// card, including the one being shown, is safe; insertion into
    /// the pile being searched is not. See [`Pile::search_with`].
    pub fn search_draw<F>(&mut self, visit: F) -> SearchOutcome
    where
        F: FnMut(&mut Deck, usize, Card) -> SearchFlow,
    {
        self.search_at(Target::Draw, visit)
    }

    /// Search the discard pile. Same contract as [`Deck::search_draw`].
    pub fn search_discard<F>(&mut self, visit: F) -> SearchOutcome
    where
        F: FnMut(&mut Deck, usize, Card) -> SearchFlow,
    {
        self.search_at(Target::Discard, visit)
    }

    /// Search a player's pile. Same contract as [`Deck::search_draw`].
    pub fn search_player<F>(&mut self, player_no: usize, visit: F) -> Result<SearchOutcome>
    where
        F: FnMut(&mut Deck, usize, Card) -> SearchFlow,
    {
        let ix = self.player_index(player_no)?;
        Ok(self.search_at(Target::Player(ix), visit))
    }

    /// Sort the draw pile with a caller-supplied comparator.
    pub fn sort_draw<F>(&mut self, compare: F)
    where
        F: FnMut(Card, Card) -> Ordering,
    {
        self.draw.sort_by(compare);
    }

    /// Sort the discard pile with a caller-supplied comparator.
    pub fn sort_discard<F>(&mut self, compare: F)
    where
        F: FnMut(Card, Card) -> Ordering,
    {
        self.discard.sort_by(compare);
    }

    /// Sort a player's pile with a caller-supplied comparator.
    pub fn sort_player<F>(&mut self, player_no: usize, compare: F) -> Result<()>
    where
        F: FnMut(Card, Card) -> Ordering,
    {
        let ix = self.player_index(player_no)?;
        self.players[ix].sort_by(compare);
        Ok(())
    }

    /// Randomize the draw pile. See [`Pile::shuffle`] for the scheme.
    pub fn shuffle_draw(&mut self) {
        self.draw.shuffle(&mut self.rng);
    }

    /// Randomize a player's pile.
    pub fn shuffle_player(&mut self, player_no: usize) -> Result<()> {
        let ix = self.player_index(player_no)?;
        self.players[ix].shuffle(&mut self.rng);
        Ok(())
    }

    /// Shuffle the discard pile in place, then move every card,
    /// top-first, to the bottom of the draw pile.
    ///
    /// Leaves the discard pile empty. This is the only operation that
    /// moves cards from the discard pile back into the draw pile.
    pub fn shuffle_discard_into_draw(&mut self) {
        self.discard.shuffle(&mut self.rng);
        while let Ok(card) = self.discard.remove(PilePick::Top) {
            self.draw.insert(card, PileEnd::Bottom);
        }
        self.debug_assert_conserved();
    }

    /// Map a 1-based seat number to an internal pile index.
    fn player_index(&self, player_no: usize) -> Result<usize> {
        if player_no == 0 || player_no > self.players.len() {
            return Err(Error::BadPlayer {
                player: player_no,
                count: self.players.len(),
            });
        }
        Ok(player_no - 1)
    }

    fn check_discard_capacity(&self) -> Result<()> {
        if self.discard.len() == self.total {
            return Err(Error::DiscardFull {
                capacity: self.total,
            });
        }
        Ok(())
    }

    fn target_pile(&self, target: Target) -> &Pile {
        match target {
            Target::Draw => &self.draw,
            Target::Discard => &self.discard,
            Target::Player(ix) => &self.players[ix],
        }
    }

    /// Cursor walk shared by the three search entry points.
    ///
    /// The successor link is captured before the visitor runs and dead
    /// slots are skipped without a visit, so the visitor may remove
    /// cards from the pile being walked through any deck operation.
    fn search_at<F>(&mut self, target: Target, mut visit: F) -> SearchOutcome
    where
        F: FnMut(&mut Deck, usize, Card) -> SearchFlow,
    {
        let mut cursor = self.target_pile(target).cursor_front();
        let mut index = 0;
        while let Some(ix) = cursor {
            let (card, next) = self.target_pile(target).cursor_read(ix);
            cursor = next;
            let Some(card) = card else { continue };
            if let SearchFlow::Found = visit(self, index, card) {
                return SearchOutcome::Found;
            }
            index += 1;
        }
        SearchOutcome::NotFound
    }

    fn debug_assert_conserved(&self) {
        debug_assert_eq!(
            self.draw.len()
                + self.discard.len()
                + self.players.iter().map(Pile::len).sum::<usize>(),
            self.total,
            "card conservation violated"
        );
    }
}
