//! Joker-catching demonstration game.
//!
//! Deals a shuffled deck round-robin, has every player discard matched
//! rank pairs, then passes random cards around the table until a single
//! card, the joker, is left in someone's hand. That player loses.
//!
//! Everything here runs through the public deck API; the binary is an
//! external consumer of the engine, not part of it.

use std::cmp::Ordering;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use log::debug;

use cardpile::cards::RANK_ACE;
use cardpile::{Card, Deck, DeckRng, PilePick, SearchFlow, SearchOutcome};

/// Deal a shuffled deck and discard matched pairs until one player is
/// left holding the joker.
#[derive(Debug, Parser)]
#[command(name = "catch-joker", version)]
struct Args {
    /// Number of players at the table.
    players: usize,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Sort each hand by suit and rank after the deal.
    #[arg(long)]
    sorted: bool,

    /// Run without waiting for enter between rounds.
    #[arg(long)]
    no_pause: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.players < 2 {
        bail!("the game needs at least two players");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("seed {seed}");

    let mut deck = Deck::with_rng(args.players, 1, DeckRng::new(seed))?;
    deck.shuffle_draw();

    println!("Shuffled draw pile:");
    deck.dump_draw(show_card);
    println!();

    // Deal the whole pile round-robin, top card first.
    let mut player_no = 0;
    while deck.draw_count() > 0 {
        player_no = wrap(player_no + 1, args.players);
        deck.deal(PilePick::Top, player_no)
            .with_context(|| format!("dealing to player {player_no}"))?;
    }

    if args.sorted {
        for player_no in 1..=args.players {
            deck.sort_player(player_no, by_suit_then_rank)?;
        }
    }

    println!("\nDiscarding matched pairs:");
    for player_no in 1..=args.players {
        while discard_pair(&mut deck, player_no)? == SearchOutcome::Found {}
        print!("Player {player_no}: ");
        deck.dump_player(player_no, show_card)?;
        println!();
    }

    // Pass cards around the table until only the joker is outside the
    // discard pile.
    let mut player_no = 1;
    while deck.discard_count() < deck.total_count() - 1 {
        pause(args.no_pause)?;

        player_no = next_holding(&deck, player_no)?;
        let victim = next_holding(&deck, wrap(player_no + 1, args.players))?;

        let hand = deck.player_card_count(victim)?;
        let pick = deck.rng_mut().gen_index(hand);
        let drawn = deck.peek_player(victim, PilePick::Index(pick))?;
        println!("Player {player_no} draws from player {victim} ===> [{pick}]{drawn}");
        deck.transfer(PilePick::Index(pick), victim, player_no)?;

        // A fresh draw forms at most one new pair, so one pass settles
        // the hand.
        discard_pair(&mut deck, player_no)?;
        print!("Player {player_no}: ");
        deck.dump_player(player_no, show_card)?;
        println!();
        print!("Player {victim}: ");
        deck.dump_player(victim, show_card)?;
        println!();

        player_no = victim;
    }

    for player_no in 1..=args.players {
        if deck.player_card_count(player_no)? > 0 {
            println!("\nPlayer {player_no} loses the game !!");
            break;
        }
    }

    deck.shuffle_discard_into_draw();
    debug!("deck recombined, draw pile holds {} cards", deck.draw_count());
    Ok(())
}

/// One matching pass over a hand.
///
/// Walks the hand; at each card it nested-searches the same hand for a
/// second card of the same rank and throws both to the discard pile.
/// The first partner always sits below the current card (earlier pairs
/// were settled on earlier visits), so discarding it never shifts the
/// current card's position.
fn discard_pair(deck: &mut Deck, player_no: usize) -> cardpile::Result<SearchOutcome> {
    deck.search_player(player_no, |deck, index, card| {
        let inner = deck.search_player(player_no, |deck, j, other| {
            if j == index || other.rank() != card.rank() {
                return SearchFlow::Continue;
            }
            match deck.discard_from_player(player_no, PilePick::Index(j)) {
                Ok(()) => SearchFlow::Found,
                Err(_) => SearchFlow::Continue,
            }
        });
        match inner {
            Ok(SearchOutcome::Found) => {
                deck.discard_from_player(player_no, PilePick::Index(index)).ok();
                SearchFlow::Found
            }
            _ => SearchFlow::Continue,
        }
    })
}

/// Next seat at or after `start` still holding cards.
fn next_holding(deck: &Deck, start: usize) -> cardpile::Result<usize> {
    let players = deck.player_count();
    let mut player_no = start;
    loop {
        if deck.player_card_count(player_no)? > 0 {
            return Ok(player_no);
        }
        player_no = wrap(player_no + 1, players);
    }
}

fn wrap(player_no: usize, players: usize) -> usize {
    if player_no > players {
        1
    } else {
        player_no
    }
}

fn show_card(index: usize, card: Card) {
    print!("[{index}]{card}\t");
}

/// Suit-major order with spades first; aces lead their suit.
fn by_suit_then_rank(a: Card, b: Card) -> Ordering {
    b.suit()
        .code()
        .cmp(&a.suit().code())
        .then_with(|| rank_order(a).cmp(&rank_order(b)))
}

fn rank_order(card: Card) -> u8 {
    if card.rank() == RANK_ACE {
        0
    } else {
        card.rank()
    }
}

fn pause(skip: bool) -> anyhow::Result<()> {
    if skip {
        return Ok(());
    }
    print!("\nPress enter for the next round ...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
