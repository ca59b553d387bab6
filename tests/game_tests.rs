//! Whole-game scenarios: seeded joker-catching games from deal to loser.
//!
//! The driver here mirrors the demonstration binary without the I/O so
//! games run headless and deterministic.

use cardpile::{Deck, DeckRng, PilePick, SearchFlow, SearchOutcome};

fn wrap(player_no: usize, players: usize) -> usize {
    if player_no > players {
        1
    } else {
        player_no
    }
}

fn next_holding(deck: &Deck, start: usize) -> usize {
    let mut player_no = start;
    loop {
        if deck.player_card_count(player_no).unwrap() > 0 {
            return player_no;
        }
        player_no = wrap(player_no + 1, deck.player_count());
    }
}

/// One matching pass: discard the first rank pair in the hand.
fn discard_pair(deck: &mut Deck, player_no: usize) -> SearchOutcome {
    deck.search_player(player_no, |deck, index, card| {
        let inner = deck
            .search_player(player_no, |deck, j, other| {
                if j == index || other.rank() != card.rank() {
                    return SearchFlow::Continue;
                }
                match deck.discard_from_player(player_no, PilePick::Index(j)) {
                    Ok(()) => SearchFlow::Found,
                    Err(_) => SearchFlow::Continue,
                }
            })
            .unwrap();
        match inner {
            SearchOutcome::Found => {
                deck.discard_from_player(player_no, PilePick::Index(index))
                    .unwrap();
                SearchFlow::Found
            }
            SearchOutcome::NotFound => SearchFlow::Continue,
        }
    })
    .unwrap()
}

/// Play a full game; returns the deck at the end and the losing seat.
fn play(players: usize, seed: u64) -> (Deck, usize) {
    let mut deck = Deck::with_rng(players, 1, DeckRng::new(seed)).unwrap();
    deck.shuffle_draw();

    let mut player_no = 0;
    while deck.draw_count() > 0 {
        player_no = wrap(player_no + 1, players);
        deck.deal(PilePick::Top, player_no).unwrap();
    }

    for player_no in 1..=players {
        while discard_pair(&mut deck, player_no) == SearchOutcome::Found {}
    }

    let mut rounds = 0;
    let mut player_no = 1;
    while deck.discard_count() < deck.total_count() - 1 {
        rounds += 1;
        assert!(rounds < 100_000, "game did not terminate (seed {seed})");

        player_no = next_holding(&deck, player_no);
        let victim = next_holding(&deck, wrap(player_no + 1, players));

        let hand = deck.player_card_count(victim).unwrap();
        let pick = deck.rng_mut().gen_index(hand);
        deck.transfer(PilePick::Index(pick), victim, player_no).unwrap();

        discard_pair(&mut deck, player_no);
        player_no = victim;
    }

    let loser = (1..=players)
        .find(|&seat| deck.player_card_count(seat).unwrap() > 0)
        .expect("someone must hold the last card");
    (deck, loser)
}

#[test]
fn test_games_end_with_the_joker() {
    for players in 2..=5 {
        for seed in [1, 7, 42, 1234] {
            let (deck, loser) = play(players, seed);

            assert_eq!(deck.discard_count(), deck.total_count() - 1);
            assert_eq!(deck.player_card_count(loser), Ok(1));
            let last = deck.peek_player(loser, PilePick::Top).unwrap();
            assert!(last.is_joker(), "last card was {last}, not the joker");

            // Every other seat is empty.
            for seat in (1..=players).filter(|&s| s != loser) {
                assert_eq!(deck.player_card_count(seat), Ok(0));
            }
        }
    }
}

#[test]
fn test_games_replay_deterministically() {
    let (_, loser_a) = play(4, 42);
    let (_, loser_b) = play(4, 42);
    assert_eq!(loser_a, loser_b);
}

#[test]
fn test_recombined_deck_is_whole() {
    let (mut deck, loser) = play(3, 7);

    deck.discard_from_player(loser, PilePick::Top).unwrap();
    deck.shuffle_discard_into_draw();

    assert_eq!(deck.draw_count(), deck.total_count());
    assert_eq!(deck.discard_count(), 0);
}
