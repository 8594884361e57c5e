//! The constraint checker: pure violation detection over a grid and hints.
//!
//! A *solved* grid satisfies four invariants:
//!
//! 1. Every row and column contains exactly three suns and three moons.
//! 2. No three consecutive cells in a row or column share a symbol.
//! 3. Every hint relation holds between its two cells.
//! 4. No cell is empty.
//!
//! During play a grid may be partial; [`find_violations`] reports every cell
//! that breaks invariants 1-3 with respect to the cells filled so far, and
//! never forbids an invalid intermediate state.

use crate::{Grid, HintSet, HintValue, Line, Position, PositionSet, Symbol};

/// The maximum number of times one symbol may appear in a row or column.
pub const LINE_LIMIT: usize = 3;

/// Returns every cell position participating in at least one broken rule.
///
/// Pure and deterministic: the result depends only on the final grid and
/// hint contents, never on mutation order. Each position appears at most
/// once regardless of how many rules it breaks.
///
/// Three rules are checked independently:
///
/// - **Count**: if a symbol occurs more than three times in a row or column,
///   every cell of that symbol in that line is flagged — all occurrences,
///   not only the excess ones.
/// - **Run**: every window of three consecutive equal symbols (horizontal or
///   vertical) flags all three cells; longer runs are covered by the
///   overlapping windows.
/// - **Hint**: a hint whose two cells are both filled flags both cells when
///   the relation is broken. Hints with an empty endpoint are skipped.
///
/// # Examples
///
/// ```
/// use tango_core::{Grid, HintSet, Position, find_violations};
///
/// let grid: Grid = "AAABBB..............................".parse()?;
/// let violations = find_violations(&grid, &HintSet::new());
///
/// // The leading A-A-A run flags its three cells, as does B-B-B
/// assert!(violations.contains(Position::new(0, 0)));
/// assert!(violations.contains(Position::new(0, 1)));
/// assert!(violations.contains(Position::new(0, 2)));
/// assert_eq!(violations.len(), 6);
/// # Ok::<(), tango_core::ParseGridError>(())
/// ```
#[must_use]
pub fn find_violations(grid: &Grid, hints: &HintSet) -> PositionSet {
    let mut violations = PositionSet::EMPTY;
    check_counts(grid, &mut violations);
    check_runs(grid, &mut violations);
    check_hints(grid, hints, &mut violations);
    violations
}

/// Returns `true` iff [`find_violations`] reports nothing.
///
/// Independent of fullness: an empty grid is valid.
#[must_use]
pub fn is_valid(grid: &Grid, hints: &HintSet) -> bool {
    find_violations(grid, hints).is_empty()
}

/// Returns `true` iff the grid is full and violation-free.
#[must_use]
pub fn is_solved(grid: &Grid, hints: &HintSet) -> bool {
    grid.is_full() && is_valid(grid, hints)
}

fn check_counts(grid: &Grid, violations: &mut PositionSet) {
    for line in Line::ALL {
        for symbol in Symbol::ALL {
            let count = line
                .positions()
                .filter(|&pos| grid.get(pos) == Some(symbol))
                .count();
            if count > LINE_LIMIT {
                for pos in line.positions() {
                    if grid.get(pos) == Some(symbol) {
                        violations.insert(pos);
                    }
                }
            }
        }
    }
}

fn check_runs(grid: &Grid, violations: &mut PositionSet) {
    for pos in Position::ALL {
        let Some(symbol) = grid.get(pos) else {
            continue;
        };
        let steps: [fn(Position) -> Option<Position>; 2] = [Position::right, Position::down];
        for step in steps {
            let window = step(pos).and_then(|second| {
                let third = step(second)?;
                (grid.get(second) == Some(symbol) && grid.get(third) == Some(symbol))
                    .then_some((second, third))
            });
            if let Some((second, third)) = window {
                violations.insert(pos);
                violations.insert(second);
                violations.insert(third);
            }
        }
    }
}

fn check_hints(grid: &Grid, hints: &HintSet, violations: &mut PositionSet) {
    for (key, value) in hints.iter() {
        let (a, b) = key.cells();
        let (Some(first), Some(second)) = (grid.get(a), grid.get(b)) else {
            continue;
        };
        let broken = match value {
            HintValue::Equal => first != second,
            HintValue::Different => first == second,
        };
        if broken {
            violations.insert(a);
            violations.insert(b);
        }
    }
}
