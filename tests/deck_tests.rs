//! End-to-end deck scenarios.
//!
//! These exercise the public API the way a game driver does: canonical
//! construction, round-robin dealing, pair discarding, and recombining
//! the discard pile into the draw pile.

use std::cmp::Ordering;

use cardpile::cards::{RANK_ACE, RANK_QUEEN};
use cardpile::{
    canonical_deck, Card, Deck, DeckRng, Error, Pile, PileEnd, PilePick, Suit,
};

fn wrap(player_no: usize, players: usize) -> usize {
    if player_no > players {
        1
    } else {
        player_no
    }
}

/// Suit-major order with spades first; aces lead their suit.
fn by_suit_then_rank(a: Card, b: Card) -> Ordering {
    let rank_order = |c: Card| if c.rank() == RANK_ACE { 0 } else { c.rank() };
    b.suit()
        .code()
        .cmp(&a.suit().code())
        .then_with(|| rank_order(a).cmp(&rank_order(b)))
}

#[test]
fn test_canonical_draw_order() {
    for joker_count in [0, 1, 3] {
        let deck = Deck::with_rng(2, joker_count, DeckRng::new(0)).unwrap();

        let mut dumped = Vec::new();
        deck.dump_draw(|index, card| dumped.push((index, card)));

        let expected: Vec<_> = canonical_deck(joker_count).enumerate().collect();
        assert_eq!(dumped, expected);
    }
}

#[test]
fn test_round_robin_deal_fills_hands() {
    let mut deck = Deck::with_rng(4, 1, DeckRng::new(42)).unwrap();
    assert_eq!(deck.total_count(), 53);

    let mut player_no = 0;
    while deck.draw_count() > 0 {
        player_no = wrap(player_no + 1, 4);
        deck.deal(PilePick::Top, player_no).unwrap();
    }

    // 53 cards over 4 seats starting at player 1: the first seat takes
    // the odd card.
    assert_eq!(deck.player_card_count(1), Ok(14));
    assert_eq!(deck.player_card_count(2), Ok(13));
    assert_eq!(deck.player_card_count(3), Ok(13));
    assert_eq!(deck.player_card_count(4), Ok(13));
    assert_eq!(deck.draw_count(), 0);
}

#[test]
fn test_discard_loop_empties_hand_then_fails() {
    let mut deck = Deck::with_rng(2, 0, DeckRng::new(42)).unwrap();
    for _ in 0..7 {
        deck.deal(PilePick::Top, 2).unwrap();
    }

    let count = deck.player_card_count(2).unwrap();
    for _ in 0..count {
        deck.discard_from_player(2, PilePick::Top).unwrap();
    }

    assert_eq!(deck.player_card_count(2), Ok(0));
    assert_eq!(deck.discard_count(), count);
    assert_eq!(
        deck.discard_from_player(2, PilePick::Top),
        Err(Error::EmptyPile)
    );
}

#[test]
fn test_two_queens_sort_deterministic_and_idempotent() {
    let q_heart = Card::new(Suit::Heart, RANK_QUEEN);
    let q_spade = Card::new(Suit::Spade, RANK_QUEEN);

    let mut pile = Pile::new();
    pile.insert(q_heart, PileEnd::Bottom);
    pile.insert(q_spade, PileEnd::Bottom);

    pile.sort_by(by_suit_then_rank);
    let once: Vec<_> = pile.iter().collect();
    assert_eq!(once, vec![q_spade, q_heart]);

    pile.sort_by(by_suit_then_rank);
    let twice: Vec<_> = pile.iter().collect();
    assert_eq!(once, twice);
}

#[test]
fn test_full_deal_then_recombine() {
    let mut deck = Deck::with_rng(3, 1, DeckRng::new(7)).unwrap();
    deck.shuffle_draw();

    let mut player_no = 0;
    while deck.draw_count() > 0 {
        player_no = wrap(player_no + 1, 3);
        deck.deal(PilePick::Top, player_no).unwrap();
    }

    for player_no in 1..=3 {
        let count = deck.player_card_count(player_no).unwrap();
        for _ in 0..count {
            deck.discard_from_player(player_no, PilePick::Top).unwrap();
        }
    }
    assert_eq!(deck.discard_count(), 53);

    deck.shuffle_discard_into_draw();
    assert_eq!(deck.discard_count(), 0);
    assert_eq!(deck.draw_count(), 53);

    // Everything is back; the multiset matches a fresh deck.
    let mut values: Vec<_> = Vec::new();
    deck.dump_draw(|_, card| values.push(card.raw()));
    values.sort_unstable();
    let mut expected: Vec<_> = canonical_deck(1).map(|c| c.raw()).collect();
    expected.sort_unstable();
    assert_eq!(values, expected);
}

#[test]
fn test_seeded_decks_replay_identically() {
    let mut a = Deck::with_rng(4, 1, DeckRng::new(99)).unwrap();
    let mut b = Deck::with_rng(4, 1, DeckRng::new(99)).unwrap();

    a.shuffle_draw();
    b.shuffle_draw();
    for deck in [&mut a, &mut b] {
        let mut player_no = 0;
        while deck.draw_count() > 0 {
            player_no = wrap(player_no + 1, 4);
            deck.deal(PilePick::Top, player_no).unwrap();
        }
    }

    for player_no in 1..=4 {
        let mut hand_a = Vec::new();
        let mut hand_b = Vec::new();
        a.dump_player(player_no, |_, c| hand_a.push(c)).unwrap();
        b.dump_player(player_no, |_, c| hand_b.push(c)).unwrap();
        assert_eq!(hand_a, hand_b);
    }
}
