//! Backtracking search over partial grids.

use derive_more::{Display, Error};
use log::debug;
use tango_core::{Grid, HintSet, Position, Symbol, is_solved};

use crate::rules::{self, candidates};

/// An error returned by [`Solver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// The given cells and hints admit no valid completion.
    ///
    /// Distinct from any transport or infrastructure failure: it means the
    /// current partial grid is provably unsolvable.
    #[display("no solution found")]
    NoSolution,
}

/// A backtracking Tango solver with forced-cell propagation.
///
/// The solver completes the grid it is given: every filled cell, player
/// entries included, constrains the search. It only ever needs to *find* a
/// completion — validity of the result is established by the
/// [`tango_core`] checker, not trusted from the search.
///
/// # Examples
///
/// ```
/// use tango_core::{Grid, HintSet};
/// use tango_solver::Solver;
///
/// let solver = Solver::new();
/// let solution = solver.solve(&Grid::new(), &HintSet::new())?;
/// assert!(solution.is_full());
/// # Ok::<(), tango_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns a full grid satisfying every rule and hint, extending the
    /// given partial grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when no valid completion exists.
    pub fn solve(&self, grid: &Grid, hints: &HintSet) -> Result<Grid, SolveError> {
        let result = search(*grid, hints);
        debug!(
            "solve: {} given cells, {}",
            grid.filled_count(),
            if result.is_some() { "solved" } else { "no solution" },
        );
        result.ok_or(SolveError::NoSolution)
    }

    /// Counts completions of the given grid, stopping once `limit` have been
    /// found.
    ///
    /// A generated puzzle is unique exactly when
    /// `count_solutions(problem, hints, 2) == 1`.
    #[must_use]
    pub fn count_solutions(&self, grid: &Grid, hints: &HintSet, limit: usize) -> usize {
        let mut found = 0;
        count(*grid, hints, limit, &mut found);
        found
    }

    /// Returns `true` if the grid can be completed with forced-cell
    /// propagation plus at most `max_depth` nested guesses.
    ///
    /// This is a difficulty probe, not a solvability check: a grid that
    /// fails it may still be solvable by deeper search.
    #[must_use]
    pub fn solvable_with_lookahead(&self, grid: &Grid, hints: &HintSet, max_depth: usize) -> bool {
        lookahead(*grid, hints, max_depth)
    }
}

fn first_empty(grid: &Grid) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| grid.get(pos).is_none())
}

fn search(mut grid: Grid, hints: &HintSet) -> Option<Grid> {
    rules::propagate(&mut grid, hints);
    let Some(pos) = first_empty(&grid) else {
        // Pre-filled cells are not re-checked during search, so a player
        // grid that was already contradictory can propagate to a full but
        // invalid grid. The final check rejects it.
        return is_solved(&grid, hints).then_some(grid);
    };
    for symbol in candidates(&grid, hints, pos) {
        let mut next = grid;
        next.set(pos, symbol);
        if let Some(solution) = search(next, hints) {
            return Some(solution);
        }
    }
    None
}

fn count(mut grid: Grid, hints: &HintSet, limit: usize, found: &mut usize) {
    if *found >= limit {
        return;
    }
    rules::propagate(&mut grid, hints);
    let Some(pos) = first_empty(&grid) else {
        if is_solved(&grid, hints) {
            *found += 1;
        }
        return;
    };
    for symbol in candidates(&grid, hints, pos) {
        let mut next = grid;
        next.set(pos, symbol);
        count(next, hints, limit, found);
        if *found >= limit {
            return;
        }
    }
}

fn lookahead(mut grid: Grid, hints: &HintSet, depth: usize) -> bool {
    rules::propagate(&mut grid, hints);
    let Some(pos) = first_empty(&grid) else {
        return is_solved(&grid, hints);
    };
    if depth == 0 {
        return false;
    }
    Symbol::ALL.into_iter().any(|symbol| {
        if !rules::fits(&grid, hints, pos, symbol) {
            return false;
        }
        let mut next = grid;
        next.set(pos, Some(symbol));
        lookahead(next, hints, depth - 1)
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tango_core::{HintDirection, HintKey, HintValue, find_violations};

    use super::*;

    const FULL_VALID: &str = "BBABAAAABBABAABABBBBABAAABAABBBABABA";

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid string")
    }

    #[test]
    fn test_solve_empty_grid() {
        let solver = Solver::new();
        let hints = HintSet::new();
        let solution = solver.solve(&Grid::new(), &hints).unwrap();
        assert!(solution.is_full());
        assert!(find_violations(&solution, &hints).is_empty());
    }

    #[test]
    fn test_solve_extends_partial_grid() {
        let solver = Solver::new();
        let hints = HintSet::new();
        let partial = grid("AB..BA..............................");
        let solution = solver.solve(&partial, &hints).unwrap();

        // Given cells are preserved
        for (pos, symbol) in partial.filled_cells() {
            assert_eq!(solution.get(pos), Some(symbol));
        }
        assert!(is_solved(&solution, &hints));
    }

    #[test]
    fn test_solve_honors_hints() {
        let solver = Solver::new();
        let mut hints = HintSet::new();
        let key = HintKey::new(Position::new(0, 0), HintDirection::Horizontal);
        hints.insert(key, HintValue::Equal);

        let solution = solver.solve(&Grid::new(), &hints).unwrap();
        let (a, b) = key.cells();
        assert_eq!(solution.get(a), solution.get(b));
    }

    #[test]
    fn test_solve_reports_contradiction() {
        let solver = Solver::new();
        // Four suns in row 0: no completion can fix the count excess
        let bad = grid("A.AA.A..............................");
        assert_eq!(
            solver.solve(&bad, &HintSet::new()),
            Err(SolveError::NoSolution)
        );
    }

    #[test]
    fn test_solve_reports_hint_contradiction() {
        let solver = Solver::new();
        let mut g = Grid::new();
        g.set(Position::new(0, 0), Some(Symbol::Sun));
        g.set(Position::new(0, 1), Some(Symbol::Moon));

        let mut hints = HintSet::new();
        hints.insert(
            HintKey::new(Position::new(0, 0), HintDirection::Horizontal),
            HintValue::Equal,
        );
        assert_eq!(solver.solve(&g, &hints), Err(SolveError::NoSolution));
    }

    #[test]
    fn test_count_solutions_full_grid_is_one() {
        let solver = Solver::new();
        let full = grid(FULL_VALID);
        assert_eq!(solver.count_solutions(&full, &HintSet::new(), 2), 1);
    }

    #[test]
    fn test_count_solutions_empty_grid_hits_limit() {
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&Grid::new(), &HintSet::new(), 2), 2);
    }

    #[test]
    fn test_count_solutions_contradiction_is_zero() {
        let solver = Solver::new();
        let bad = grid("A.AA.A..............................");
        assert_eq!(solver.count_solutions(&bad, &HintSet::new(), 2), 0);
    }

    #[test]
    fn test_lookahead_full_grid() {
        let solver = Solver::new();
        let full = grid(FULL_VALID);
        assert!(solver.solvable_with_lookahead(&full, &HintSet::new(), 0));
    }

    #[test]
    fn test_lookahead_depth_zero_requires_pure_propagation() {
        let solver = Solver::new();
        // Nothing is forced on an empty board
        assert!(!solver.solvable_with_lookahead(&Grid::new(), &HintSet::new(), 0));
        // Deep enough lookahead solves anything solvable
        assert!(solver.solvable_with_lookahead(&Grid::new(), &HintSet::new(), 36));
    }

    #[test]
    fn test_solution_preserves_solved_input() {
        let solver = Solver::new();
        let full = grid(FULL_VALID);
        assert_eq!(solver.solve(&full, &HintSet::new()).unwrap(), full);
    }

    fn cell_entries(max: usize) -> impl Strategy<Value = Vec<(u8, u8, usize)>> {
        prop::collection::vec((0u8..6, 0u8..6, 0usize..2), 0..max)
    }

    proptest! {
        // Whenever a completion exists it extends the givens and satisfies
        // every invariant.
        #[test]
        fn prop_solve_extends_givens(cells in cell_entries(8)) {
            let mut g = Grid::new();
            for (row, col, s) in cells {
                g.set(Position::new(row, col), Some(Symbol::ALL[s]));
            }
            let solver = Solver::new();
            let hints = HintSet::new();
            if let Ok(solution) = solver.solve(&g, &hints) {
                prop_assert!(is_solved(&solution, &hints));
                for (pos, symbol) in g.filled_cells() {
                    prop_assert_eq!(solution.get(pos), Some(symbol));
                }
            }
        }
    }
}
