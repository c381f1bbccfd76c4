//! Headless all-bot matches.
//!
//! Every seat, including the human one, is driven by the standard bot.
//! Useful for eyeballing balance and for smoke-testing rule changes.

use clap::Parser;
use log::{info, warn};

use kariba::{apply, initialize_match, standings, suggest_move, GameRng, MatchConfig};

#[derive(Parser, Debug)]
#[command(name = "kariba-sim", about = "Play Kariba matches between bots")]
struct Args {
    /// Number of matches to play.
    #[arg(long, default_value_t = 10)]
    matches: u64,

    /// Seed of the first match; match n uses seed + n.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Seats at the table.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,

    /// Hand size.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..))]
    hand_size: u8,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = MatchConfig::new()
        .with_table_size(args.players as usize)
        .with_hand_size(args.hand_size as usize);

    let mut wins = vec![0u64; config.table_size()];
    for n in 0..args.matches {
        let seed = args.seed + n;
        let mut state = initialize_match(&config, "Seat 0", &mut GameRng::new(seed));

        while !state.is_finished() {
            let Some(mv) = suggest_move(&state, state.active) else {
                warn!("seed {}: {} has no move, stopping", seed, state.active);
                break;
            };
            match apply(&state, &mv) {
                Ok(next) => state = next,
                Err(e) => {
                    warn!("seed {}: rejected bot move: {}", seed, e);
                    break;
                }
            }
        }

        let table = standings(&state);
        if let Some(top) = table.first() {
            wins[top.player.index()] += 1;
        }
        let scores: Vec<String> = table
            .iter()
            .map(|s| format!("{}={}", state.seat(s.player).name, s.score))
            .collect();
        info!("seed {} finished in {} turns: {}", seed, state.turn, scores.join(" "));
    }

    for (seat, count) in wins.iter().enumerate() {
        println!("seat {}: {} wins", seat, count);
    }
}
