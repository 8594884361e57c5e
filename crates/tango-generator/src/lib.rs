//! Puzzle generator for the Tango binary puzzle.
//!
//! The generator produces fair puzzles: the fixed cells are always
//! consistent with the board rules, exactly one completion satisfies the
//! hints, and that completion is reachable with forced-cell deduction plus
//! a small amount of lookahead. Difficulty controls how many cells are
//! pre-filled.
//!
//! # Examples
//!
//! ```
//! use tango_generator::{Difficulty, PuzzleGenerator};
//!
//! let mut generator = PuzzleGenerator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Medium)?;
//! println!("problem:  {}", puzzle.problem);
//! println!("solution: {}", puzzle.solution);
//! # Ok::<(), tango_generator::GenerateError>(())
//! ```

pub use self::{difficulty::*, generator::*};

mod difficulty;
mod generator;
