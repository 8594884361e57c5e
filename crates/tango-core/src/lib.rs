//! Core data model and constraint checker for the Tango binary puzzle.
//!
//! A Tango puzzle is a 6×6 grid filled with two symbols (sun and moon)
//! subject to three rules: each row and column holds exactly three of each
//! symbol, no three consecutive cells share a symbol, and inter-cell
//! equality/inequality hints must hold.
//!
//! This crate provides the pure pieces only: the grid model
//! ([`Grid`], [`Symbol`], [`Position`], [`CellRole`]), the hint model
//! ([`HintKey`], [`HintSet`]), and the stateless constraint checker
//! ([`find_violations`]). Puzzle generation, solving, and session tracking
//! live in sibling crates that consume these types.
//!
//! # Examples
//!
//! ```
//! use tango_core::{find_violations, Grid, HintSet, Position, Symbol};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Some(Symbol::Sun));
//! grid.set(Position::new(0, 1), Some(Symbol::Sun));
//! grid.set(Position::new(0, 2), Some(Symbol::Sun));
//!
//! let violations = find_violations(&grid, &HintSet::new());
//! assert_eq!(violations.len(), 3);
//! ```

pub use self::{checker::*, grid::*, hint::*, line::*, position::*, symbol::*};

mod checker;
mod grid;
mod hint;
mod line;
mod position;
mod symbol;

/// The side length of the board.
pub const SIDE: usize = 6;

/// The number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;
