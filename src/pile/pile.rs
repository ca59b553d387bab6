//! Ordered pile of cards over a slot arena.
//!
//! A [`Pile`] stores its cards in an arena of slots addressed by stable
//! indices, with explicit prev/next links forming a doubly-linked chain
//! from top to bottom. Indices stay valid while other cards come and go,
//! which gives the pile its two load-bearing properties:
//!
//! - O(1) insertion and removal at either end, O(index) positional
//!   access by walking live links from the top.
//! - A search traversal that keeps working while the visitor removes
//!   cards from the pile it is searching. The cursor captures the
//!   current slot's `next` link before the visitor runs, and a removed
//!   slot keeps that link as a forwarding pointer, so the cursor skips
//!   dead slots and lands on the successor the removed card had at
//!   removal time.
//!
//! Inserting cards while a search is in flight is not supported: an
//! insertion may reuse a freed slot the cursor still points at, and the
//! traversal order becomes unspecified (though never unsafe).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cards::Card;
use crate::error::{Error, Result};
use crate::rng::DeckRng;

/// Insertion end of a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileEnd {
    /// Insert above the current top card.
    Top,
    /// Insert below the current bottom card.
    Bottom,
}

/// Selector for removal and peeking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilePick {
    /// The top card.
    Top,
    /// The bottom card.
    Bottom,
    /// The card `index` positions below the top (0 = top).
    Index(usize),
}

/// Visitor verdict for one card during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFlow {
    /// Stop the traversal and report success.
    Found,
    /// Keep going.
    Continue,
}

/// Result of a whole search traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Some visitor call returned [`SearchFlow::Found`].
    Found,
    /// Every card was visited without a match.
    NotFound,
}

/// One arena slot.
///
/// A dead slot has been removed from the chain but keeps its `next`
/// link as a forwarding pointer for in-flight traversal cursors.
#[derive(Clone, Copy, Debug)]
struct Slot {
    card: Card,
    prev: Option<usize>,
    next: Option<usize>,
    dead: bool,
}

/// An ordered, doubly-traversable collection of cards.
///
/// The count always equals the number of linked slots; the top slot has
/// no predecessor and the bottom slot no successor; neighboring slots
/// reference each other mutually.
#[derive(Clone, Debug, Default)]
pub struct Pile {
    slots: Vec<Slot>,
    free: Vec<usize>,
    top: Option<usize>,
    bottom: Option<usize>,
    len: usize,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a card at the given end. O(1).
    pub fn insert(&mut self, card: Card, end: PileEnd) {
        let ix = self.alloc(card);
        match end {
            PileEnd::Top => {
                self.slots[ix].next = self.top;
                match self.top {
                    Some(old) => self.slots[old].prev = Some(ix),
                    None => self.bottom = Some(ix),
                }
                self.top = Some(ix);
            }
            PileEnd::Bottom => {
                self.slots[ix].prev = self.bottom;
                match self.bottom {
                    Some(old) => self.slots[old].next = Some(ix),
                    None => self.top = Some(ix),
                }
                self.bottom = Some(ix);
            }
        }
        self.len += 1;
    }

    /// Remove and return the selected card.
    ///
    /// O(1) for [`PilePick::Top`] and [`PilePick::Bottom`], O(index) for
    /// [`PilePick::Index`]. Fails with [`Error::EmptyPile`] on an empty
    /// pile and [`Error::IndexOutOfRange`] past the end.
    pub fn remove(&mut self, pick: PilePick) -> Result<Card> {
        let ix = self.locate(pick)?;
        Ok(self.detach(ix))
    }

    /// Read the selected card without removing it.
    ///
    /// Same selectors, complexity, and failure modes as [`Pile::remove`].
    pub fn peek(&self, pick: PilePick) -> Result<Card> {
        let ix = self.locate(pick)?;
        Ok(self.slots[ix].card)
    }

    /// Visit every card from top to bottom.
    ///
    /// The visitor receives the position (0 = top) and the card. The
    /// pile is borrowed shared for the whole walk, so the visitor
    /// cannot mutate it; side effects such as printing are its business.
    pub fn dump<F>(&self, mut visit: F)
    where
        F: FnMut(usize, Card),
    {
        let mut cursor = self.top;
        let mut index = 0;
        while let Some(ix) = cursor {
            let slot = &self.slots[ix];
            visit(index, slot.card);
            index += 1;
            cursor = slot.next;
        }
    }

    /// Iterate the cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        let mut cursor = self.top;
        std::iter::from_fn(move || {
            let ix = cursor?;
            let slot = &self.slots[ix];
            cursor = slot.next;
            Some(slot.card)
        })
    }

    /// Search from top to bottom, stopping at the first card the
    /// visitor reports [`SearchFlow::Found`] on.
    ///
    /// The visitor receives the pile itself and may remove cards,
    /// including the one it is being shown, without corrupting the
    /// walk; see the module docs for the forwarding-link contract. The
    /// index counts visited cards and is not re-derived after the
    /// visitor removes earlier cards. Cards the visitor is never shown
    /// (past a `Found`) are guaranteed unvisited.
    pub fn search_with<F>(&mut self, mut visit: F) -> SearchOutcome
    where
        F: FnMut(&mut Pile, usize, Card) -> SearchFlow,
    {
        let mut cursor = self.cursor_front();
        let mut index = 0;
        while let Some(ix) = cursor {
            let (card, next) = self.cursor_read(ix);
            cursor = next;
            let Some(card) = card else { continue };
            if let SearchFlow::Found = visit(self, index, card) {
                return SearchOutcome::Found;
            }
            index += 1;
        }
        SearchOutcome::NotFound
    }

    /// Sort the pile in place with a caller-supplied comparator.
    ///
    /// Stable insertion sort over the slot links: each unsorted card
    /// walks backward through the sorted prefix and is spliced in after
    /// the first predecessor that does not compare greater, or becomes
    /// the new top. Nodes are relinked, not value-swapped, so equal
    /// cards keep their original relative order. O(n²) worst case, O(n)
    /// on an already sorted pile; an empty pile is a no-op.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(Card, Card) -> Ordering,
    {
        let Some(first) = self.top else { return };
        let mut unsorted = self.slots[first].next;
        while let Some(ix) = unsorted {
            // Captured before splicing relocates `ix`.
            let after = self.slots[ix].next;
            let mut probe = self.slots[ix].prev;
            loop {
                match probe {
                    None => {
                        self.splice_after(None, ix);
                        break;
                    }
                    Some(p) => {
                        if compare(self.slots[p].card, self.slots[ix].card) != Ordering::Greater {
                            self.splice_after(Some(p), ix);
                            break;
                        }
                        probe = self.slots[p].prev;
                    }
                }
            }
            unsorted = after;
        }
    }

    /// Randomize the pile by swapping card values.
    ///
    /// For each slot from top to bottom, a target is drawn uniformly
    /// over the whole pile (not a shrinking suffix) and the two card
    /// values are swapped in place, leaving the link structure alone.
    /// The result is therefore not a uniform random permutation; the
    /// exact scheme is part of the behavior contract (identical seeds
    /// reproduce identical piles) and must not be replaced with a
    /// textbook Fisher-Yates without flagging the change.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        let len = self.len;
        let mut cursor = self.top;
        while let Some(ix) = cursor {
            let mut target = self.top;
            for _ in 0..rng.gen_index(len) {
                target = target.and_then(|t| self.slots[t].next);
            }
            if let Some(t) = target {
                let tmp = self.slots[ix].card;
                self.slots[ix].card = self.slots[t].card;
                self.slots[t].card = tmp;
            }
            cursor = self.slots[ix].next;
        }
    }

    /// First live slot of a traversal, if any.
    pub(crate) fn cursor_front(&self) -> Option<usize> {
        self.top
    }

    /// Read a cursor slot: the card if the slot is still live, and the
    /// forwarding `next` link either way.
    pub(crate) fn cursor_read(&self, ix: usize) -> (Option<Card>, Option<usize>) {
        let slot = &self.slots[ix];
        let card = if slot.dead { None } else { Some(slot.card) };
        (card, slot.next)
    }

    fn alloc(&mut self, card: Card) -> usize {
        let slot = Slot {
            card,
            prev: None,
            next: None,
            dead: false,
        };
        match self.free.pop() {
            Some(ix) => {
                self.slots[ix] = slot;
                ix
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    /// Resolve a selector to a live slot index.
    fn locate(&self, pick: PilePick) -> Result<usize> {
        let top = self.top.ok_or(Error::EmptyPile)?;
        match pick {
            PilePick::Top => Ok(top),
            PilePick::Bottom => Ok(self.bottom.unwrap_or(top)),
            PilePick::Index(index) => {
                if index >= self.len {
                    return Err(Error::IndexOutOfRange {
                        index,
                        len: self.len,
                    });
                }
                let mut cursor = Some(top);
                for _ in 0..index {
                    cursor = cursor.and_then(|ix| self.slots[ix].next);
                }
                cursor.ok_or(Error::IndexOutOfRange {
                    index,
                    len: self.len,
                })
            }
        }
    }

    /// Unlink a slot and return its card.
    ///
    /// The slot keeps its `next` link so traversal cursors resting on it
    /// can still reach its old successor.
    fn detach(&mut self, ix: usize) -> Card {
        let Slot {
            card, prev, next, ..
        } = self.slots[ix];
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.top = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.bottom = prev,
        }
        let slot = &mut self.slots[ix];
        slot.prev = None;
        slot.dead = true;
        self.free.push(ix);
        self.len -= 1;
        card
    }

    /// Move slot `ix` to sit immediately after `dest` (`None` = top).
    fn splice_after(&mut self, dest: Option<usize>, ix: usize) {
        if self.slots[ix].prev == dest {
            return;
        }

        // Unlink.
        let (prev, next) = (self.slots[ix].prev, self.slots[ix].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.top = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.bottom = prev,
        }

        // Relink after `dest`.
        match dest {
            None => {
                let old_top = self.top;
                self.slots[ix].prev = None;
                self.slots[ix].next = old_top;
                match old_top {
                    Some(t) => self.slots[t].prev = Some(ix),
                    None => self.bottom = Some(ix),
                }
                self.top = Some(ix);
            }
            Some(d) => {
                let d_next = self.slots[d].next;
                self.slots[ix].prev = Some(d);
                self.slots[ix].next = d_next;
                self.slots[d].next = Some(ix);
                match d_next {
                    Some(n) => self.slots[n].prev = Some(ix),
                    None => self.bottom = Some(ix),
                }
            }
        }
    }

    /// Check the chain invariants. Test support.
    #[cfg(test)]
    fn assert_links(&self) {
        let mut seen = 0;
        let mut cursor = self.top;
        let mut prev: Option<usize> = None;
        while let Some(ix) = cursor {
            let slot = &self.slots[ix];
            assert!(!slot.dead, "dead slot {ix} linked in chain");
            assert_eq!(slot.prev, prev, "slot {ix} prev link mismatch");
            seen += 1;
            prev = Some(ix);
            cursor = slot.next;
        }
        assert_eq!(self.bottom, prev, "bottom does not match last slot");
        assert_eq!(self.len, seen, "len does not match linked slots");
    }
}
