//! Solver for the Tango binary puzzle.
//!
//! The solver combines forced-cell propagation (filling every cell with a
//! single remaining candidate) with first-empty backtracking search. It
//! consumes the [`tango_core`] grid and hint types and never defines rules
//! of its own: partial placements are filtered with [`fits`] and finished
//! grids are accepted with [`tango_core::is_solved`].
//!
//! Besides [`Solver::solve`], the crate exposes the building blocks the
//! generator needs: bounded solution counting for uniqueness checks and a
//! depth-limited lookahead probe for difficulty grading.
//!
//! # Examples
//!
//! ```
//! use tango_core::{Grid, HintSet};
//! use tango_solver::Solver;
//!
//! let solver = Solver::new();
//! let solution = solver.solve(&Grid::new(), &HintSet::new())?;
//! assert!(solution.is_full());
//! # Ok::<(), tango_solver::SolveError>(())
//! ```

pub use self::{rules::*, solver::*};

mod rules;
mod solver;
