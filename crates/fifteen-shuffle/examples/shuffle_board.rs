//! Example demonstrating board shuffling.
//!
//! This example shows how to:
//! - Create a `BoardShuffler` for a chosen board size
//! - Shuffle with a random or a fixed seed
//! - Display the shuffled board and the seed that reproduces it
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_board
//! ```
//!
//! Pick the board size and the random-walk budget:
//!
//! ```sh
//! cargo run --example shuffle_board -- --size 5 --steps 2000
//! ```
//!
//! Reproduce a previous shuffle from its seed:
//!
//! ```sh
//! cargo run --example shuffle_board -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::process;

use clap::Parser;
use fifteen_shuffle::{BoardShuffler, DEFAULT_SHUFFLE_STEPS, ShuffleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: u8,

    /// Random-walk step budget.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_SHUFFLE_STEPS)]
    steps: u32,

    /// Hex seed for a reproducible shuffle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed {
        Some(text) => match text.parse::<ShuffleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => ShuffleSeed::random(),
    };

    let shuffled = BoardShuffler::new(args.size)
        .steps(args.steps)
        .shuffle_with_seed(seed);

    println!("Seed:");
    println!("  {}", shuffled.seed);
    println!();
    println!("Board:");
    for row in shuffled.board.to_string().lines() {
        println!("  {row}");
    }
}
