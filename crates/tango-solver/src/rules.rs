//! Partial-grid rule checks used by search and propagation.

use tango_core::{
    Grid, HintDirection, HintKey, HintSet, HintValue, LINE_LIMIT, Line, Position, Symbol,
};
use tinyvec::ArrayVec;

/// Candidate symbols for one cell, at most two.
pub type Candidates = ArrayVec<[Option<Symbol>; 2]>;

/// Returns `true` if placing `symbol` at `pos` keeps the partial grid
/// consistent with the count, run, and hint rules.
///
/// The current content of `pos` is ignored; every other filled cell
/// constrains the placement. This is a necessary condition for any valid
/// completion, not a full solvability check.
#[must_use]
pub fn fits(grid: &Grid, hints: &HintSet, pos: Position, symbol: Symbol) -> bool {
    fits_counts(grid, pos, symbol)
        && fits_runs(grid, pos, symbol)
        && fits_hints(grid, hints, pos, symbol)
}

fn fits_counts(grid: &Grid, pos: Position, symbol: Symbol) -> bool {
    for line in [Line::Row { row: pos.row() }, Line::Column { col: pos.col() }] {
        let others = line
            .positions()
            .filter(|&p| p != pos && grid.get(p) == Some(symbol))
            .count();
        if others + 1 > LINE_LIMIT {
            return false;
        }
    }
    true
}

fn fits_runs(grid: &Grid, pos: Position, symbol: Symbol) -> bool {
    let row = i16::from(pos.row());
    let col = i16::from(pos.col());
    let at = |r: i16, c: i16| -> Option<Symbol> {
        if r == row && c == col {
            return Some(symbol);
        }
        let pos = Position::try_new(u8::try_from(r).ok()?, u8::try_from(c).ok()?)?;
        grid.get(pos)
    };
    // Every window of three containing the placed cell, in both orientations
    for offset in -2..=0 {
        let h = (0..3).all(|i| at(row, col + offset + i) == Some(symbol));
        let v = (0..3).all(|i| at(row + offset + i, col) == Some(symbol));
        if h || v {
            return false;
        }
    }
    true
}

fn fits_hints(grid: &Grid, hints: &HintSet, pos: Position, symbol: Symbol) -> bool {
    // The hints touching `pos`: keyed at `pos` (neighbor right/down) or at
    // the cell left/above (neighbor is that cell itself).
    let satisfies = |key: HintKey, neighbor: Position| -> bool {
        let Some(value) = hints.get(key) else {
            return true;
        };
        let Some(other) = grid.get(neighbor) else {
            return true;
        };
        match value {
            HintValue::Equal => other == symbol,
            HintValue::Different => other != symbol,
        }
    };

    if let Some(key) = HintKey::try_new(pos, HintDirection::Horizontal)
        && !satisfies(key, key.cells().1)
    {
        return false;
    }
    if let Some(key) = HintKey::try_new(pos, HintDirection::Vertical)
        && !satisfies(key, key.cells().1)
    {
        return false;
    }
    if let Some(left) = pos
        .col()
        .checked_sub(1)
        .map(|col| Position::new(pos.row(), col))
        && let Some(key) = HintKey::try_new(left, HintDirection::Horizontal)
        && !satisfies(key, left)
    {
        return false;
    }
    if let Some(up) = pos
        .row()
        .checked_sub(1)
        .map(|row| Position::new(row, pos.col()))
        && let Some(key) = HintKey::try_new(up, HintDirection::Vertical)
        && !satisfies(key, up)
    {
        return false;
    }
    true
}

/// Returns the symbols that fit at an empty cell.
///
/// For a filled cell this returns just its current symbol.
#[must_use]
pub fn candidates(grid: &Grid, hints: &HintSet, pos: Position) -> Candidates {
    let mut result = Candidates::new();
    if let Some(symbol) = grid.get(pos) {
        result.push(Some(symbol));
        return result;
    }
    for symbol in Symbol::ALL {
        if fits(grid, hints, pos, symbol) {
            result.push(Some(symbol));
        }
    }
    result
}

/// Fills every cell with exactly one candidate, repeating until a fixpoint.
///
/// Returns the number of cells filled. Cells with zero candidates are left
/// empty; the caller detects the contradiction when search reaches them.
pub fn propagate(grid: &mut Grid, hints: &HintSet) -> usize {
    let mut filled = 0;
    loop {
        let mut changed = false;
        for pos in Position::ALL {
            if grid.get(pos).is_some() {
                continue;
            }
            let options = candidates(grid, hints, pos);
            if options.len() == 1 {
                grid.set(pos, options[0]);
                filled += 1;
                changed = true;
            }
        }
        if !changed {
            return filled;
        }
    }
}
