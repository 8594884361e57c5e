//! Game session layer for the Tango binary puzzle.
//!
//! A [`Session`] owns one puzzle from generation request to completion. It
//! locks the fixed cells, refreshes the violation set on every move,
//! detects the completing move, and awards a score through a pluggable
//! [`ScorePolicy`].
//!
//! # Examples
//!
//! ```
//! use tango_core::{Position, Symbol};
//! use tango_game::Session;
//! use tango_generator::{Difficulty, PuzzleGenerator};
//!
//! let mut generator = PuzzleGenerator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Easy)?;
//! let mut session = Session::from_puzzle(Difficulty::Easy, &puzzle);
//!
//! // Free cells accept input; every move reports the violated cells.
//! for pos in Position::ALL {
//!     if !session.roles().unwrap().is_fixed(pos) {
//!         let outcome = session.set_cell(pos, Some(Symbol::Sun))?;
//!         assert!(outcome.completion.is_none());
//!         session.clear_cell(pos)?;
//!         break;
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{score::*, session::*};

mod score;
mod session;
