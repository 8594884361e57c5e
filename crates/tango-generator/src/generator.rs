//! Seeded puzzle generation.

use std::fmt::{self, Display};

use log::{debug, trace};
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use tango_core::{CELLS, Grid, HintKey, HintSet, HintValue, Position, Symbol, all_keys};
use tango_solver::{Solver, fits};

use crate::Difficulty;

/// Nested guesses the difficulty probe may use; matches what a player can
/// reasonably hold in their head.
const LOOKAHEAD_DEPTH: usize = 3;

const MAX_ATTEMPTS: usize = 1000;

/// A generated puzzle: the starting grid, its hints, and the solution it was
/// carved from.
///
/// Every filled cell of `problem` is a fixed cell consistent with the count
/// and run rules, and `solution` is the unique completion of `problem` under
/// `hints`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The starting grid; filled cells are the fixed givens.
    pub problem: Grid,
    /// The hint set accompanying the puzzle.
    pub hints: HintSet,
    /// The full grid the puzzle was carved from.
    pub solution: Grid,
    /// The RNG seed that produced this puzzle.
    pub seed: u64,
}

/// An error returned when puzzle generation gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateError {
    /// How many attempts were made before giving up.
    pub attempts: usize,
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to generate a puzzle after {} attempts",
            self.attempts
        )
    }
}

impl std::error::Error for GenerateError {}

/// A seeded Tango puzzle generator.
///
/// Generation proceeds in three steps: backtrack-fill a complete valid grid
/// in random symbol order, keep a difficulty-sized random subset of cells as
/// givens, then add solution-derived hints one at a time until the puzzle
/// has a unique solution a player can reach with bounded lookahead. A final
/// pruning pass removes hints that are no longer needed.
///
/// The generator need not be deterministic across calls, but it is fully
/// reproducible per seed.
///
/// # Examples
///
/// ```
/// use tango_core::is_solved;
/// use tango_generator::{Difficulty, PuzzleGenerator};
///
/// let mut generator = PuzzleGenerator::with_seed(42);
/// let puzzle = generator.generate(Difficulty::Easy)?;
///
/// assert_eq!(puzzle.problem.filled_count(), 14);
/// assert!(is_solved(&puzzle.solution, &puzzle.hints));
/// # Ok::<(), tango_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
    seed: u64,
    solver: Solver,
}

impl PuzzleGenerator {
    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates a generator with a fixed seed; the puzzle stream is
    /// reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            seed,
            solver: Solver::new(),
        }
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a puzzle of the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if no acceptable puzzle is found within the
    /// attempt budget.
    pub fn generate(&mut self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        for attempt in 0..MAX_ATTEMPTS {
            let solution = self.fill_full_grid();
            if let Some((problem, hints)) = self.carve(&solution, difficulty) {
                debug!(
                    "generated {difficulty} puzzle on attempt {attempt}: {} givens, {} hints",
                    problem.filled_count(),
                    hints.len(),
                );
                return Ok(GeneratedPuzzle {
                    problem,
                    hints,
                    solution,
                    seed: self.seed,
                });
            }
            trace!("attempt {attempt} produced no acceptable puzzle, retrying");
        }
        Err(GenerateError {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Backtrack-fills a complete grid satisfying the count and run rules,
    /// choosing symbols in random order.
    fn fill_full_grid(&mut self) -> Grid {
        let mut grid = Grid::new();
        let filled = fill_from(&mut grid, 0, &mut self.rng);
        debug_assert!(filled, "an empty board always has a completion");
        grid
    }

    /// Carves a puzzle out of a full solution: keeps a random
    /// difficulty-sized set of givens, then accumulates shuffled hints until
    /// the puzzle is uniquely solvable with bounded lookahead, and prunes
    /// hints that the remaining set makes redundant.
    fn carve(&mut self, solution: &Grid, difficulty: Difficulty) -> Option<(Grid, HintSet)> {
        let mut problem = Grid::new();
        let mut cells = Position::ALL;
        cells.shuffle(&mut self.rng);
        for &pos in cells.iter().take(difficulty.starting_cells()) {
            problem.set(pos, solution.get(pos));
        }

        // Every adjacent pair of the solution yields a candidate hint.
        let mut potential: Vec<(HintKey, HintValue)> = all_keys()
            .map(|key| {
                let (a, b) = key.cells();
                let value = if solution.get(a) == solution.get(b) {
                    HintValue::Equal
                } else {
                    HintValue::Different
                };
                (key, value)
            })
            .collect();
        potential.shuffle(&mut self.rng);

        let mut hints = HintSet::new();
        let mut accepted = Vec::new();
        for &(key, value) in &potential {
            hints.insert(key, value);
            accepted.push((key, value));
            if self.acceptable(&problem, &hints) {
                self.prune(&problem, &mut hints, &accepted);
                return Some((problem, hints));
            }
        }
        None
    }

    /// A puzzle is acceptable when its solution is unique and reachable with
    /// bounded lookahead.
    fn acceptable(&self, problem: &Grid, hints: &HintSet) -> bool {
        self.solver.count_solutions(problem, hints, 2) == 1
            && self
                .solver
                .solvable_with_lookahead(problem, hints, LOOKAHEAD_DEPTH)
    }

    /// Drops each hint whose removal keeps the puzzle acceptable.
    fn prune(&self, problem: &Grid, hints: &mut HintSet, accepted: &[(HintKey, HintValue)]) {
        for &(key, _) in accepted {
            let mut trial = HintSet::new();
            for (other, value) in hints.iter() {
                if other != key {
                    trial.insert(other, value);
                }
            }
            if self.acceptable(problem, &trial) {
                *hints = trial;
            }
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_from(grid: &mut Grid, index: usize, rng: &mut impl Rng) -> bool {
    if index == CELLS {
        return true;
    }
    let pos = Position::ALL[index];
    let no_hints = HintSet::new();
    let mut symbols = Symbol::ALL;
    symbols.shuffle(rng);
    for symbol in symbols {
        if fits(grid, &no_hints, pos, symbol) {
            grid.set(pos, Some(symbol));
            if fill_from(grid, index + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use tango_core::{RoleGrid, find_violations, is_solved};

    use super::*;

    #[test]
    fn test_generated_puzzle_satisfies_contract() {
        let mut generator = PuzzleGenerator::with_seed(7);
        let puzzle = generator.generate(Difficulty::Medium).unwrap();

        // Solution satisfies all four invariants
        assert!(is_solved(&puzzle.solution, &puzzle.hints));

        // Givens are consistent and taken from the solution
        assert!(find_violations(&puzzle.problem, &puzzle.hints).is_empty());
        for (pos, symbol) in puzzle.problem.filled_cells() {
            assert_eq!(puzzle.solution.get(pos), Some(symbol));
        }

        assert_eq!(puzzle.problem.filled_count(), 10);
    }

    #[test]
    fn test_generated_puzzle_is_unique() {
        let mut generator = PuzzleGenerator::with_seed(11);
        let puzzle = generator.generate(Difficulty::Hard).unwrap();
        let solver = Solver::new();
        assert_eq!(
            solver.count_solutions(&puzzle.problem, &puzzle.hints, 2),
            1
        );
    }

    #[test]
    fn test_generate_then_solve_unmodified() {
        let mut generator = PuzzleGenerator::with_seed(3);
        let puzzle = generator.generate(Difficulty::Easy).unwrap();
        let solver = Solver::new();
        let solved = solver.solve(&puzzle.problem, &puzzle.hints).unwrap();
        assert!(is_solved(&solved, &puzzle.hints));
        // Unique puzzle: the solver must land on the stored solution
        assert_eq!(solved, puzzle.solution);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let puzzle_a = PuzzleGenerator::with_seed(99)
            .generate(Difficulty::Medium)
            .unwrap();
        let puzzle_b = PuzzleGenerator::with_seed(99)
            .generate(Difficulty::Medium)
            .unwrap();
        assert_eq!(puzzle_a, puzzle_b);
    }

    #[test]
    fn test_difficulty_controls_given_count() {
        for difficulty in Difficulty::ALL {
            let mut generator = PuzzleGenerator::with_seed(5);
            let puzzle = generator.generate(difficulty).unwrap();
            assert_eq!(puzzle.problem.filled_count(), difficulty.starting_cells());
        }
    }

    #[test]
    fn test_roles_derived_from_problem_match_givens() {
        let mut generator = PuzzleGenerator::with_seed(21);
        let puzzle = generator.generate(Difficulty::Easy).unwrap();
        let roles = RoleGrid::from_problem(&puzzle.problem);
        for pos in Position::ALL {
            assert_eq!(roles.is_fixed(pos), puzzle.problem.get(pos).is_some());
        }
    }
}
