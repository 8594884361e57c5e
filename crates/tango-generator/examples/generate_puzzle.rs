//! Example demonstrating Tango puzzle generation.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty and a reproducible seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --seed 42
//! ```
//!
//! Generate several puzzles in one run:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 5
//! ```

use std::process;

use clap::Parser;
use tango_generator::{Difficulty, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle difficulty (easy, medium, hard).
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: Difficulty,

    /// RNG seed; omit for a random puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut generator = match args.seed {
        Some(seed) => PuzzleGenerator::with_seed(seed),
        None => PuzzleGenerator::new(),
    };

    for i in 0..args.count {
        let puzzle = match generator.generate(args.difficulty) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        };

        if args.count > 1 {
            println!("Puzzle {}:", i + 1);
        }
        println!("Seed:");
        println!("  {}", puzzle.seed);
        println!();
        println!("Problem:");
        println!("  {}", puzzle.problem);
        println!();
        println!("Hints:");
        for (key, value) in puzzle.hints.iter() {
            let (a, b) = key.cells();
            println!("  {a} {value} {b}");
        }
        println!();
        println!("Solution:");
        println!("  {}", puzzle.solution);
        println!();
    }
}
