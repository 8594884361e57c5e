//! The 6×6 symbol grid and cell roles.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{CELLS, Position, Symbol};

/// A 6×6 grid of optional symbols.
///
/// The board dimensions are fixed for the lifetime of the system; the only
/// mutations are generator initialization, player edits of free cells, and
/// solver overwrites when revealing a solution.
///
/// # Examples
///
/// ```
/// use tango_core::{Grid, Position, Symbol};
///
/// let mut grid = Grid::new();
/// assert!(!grid.is_full());
///
/// grid.set(Position::new(0, 0), Some(Symbol::Sun));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Symbol::Sun));
/// ```
///
/// Grids parse from and display as a compact 36-character string in
/// row-major order (`.` empty, `A` sun, `B` moon):
///
/// ```
/// use tango_core::Grid;
///
/// let grid: Grid = "ABABAB.....................BABABA...".parse()?;
/// assert_eq!(grid.filled_count(), 12);
/// # Ok::<(), tango_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Symbol>; CELLS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Returns the symbol at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Symbol> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    pub const fn set(&mut self, pos: Position, symbol: Option<Symbol>) {
        self.cells[pos.index()] = symbol;
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns an iterator over `(Position, Symbol)` pairs for every filled
    /// cell, in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (Position, Symbol)> {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|symbol| (pos, symbol)))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(symbol) => write!(f, "{symbol}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// An error returned when parsing a [`Grid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// The string is not exactly 36 characters long.
    #[display("grid string must be 36 characters, got {_0}")]
    BadLength(#[error(not(source))] usize),
    /// The string contains a character other than `.`, `A`, or `B`.
    #[display("invalid grid character: {_0:?}")]
    BadChar(#[error(not(source))] char),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELLS {
            return Err(ParseGridError::BadLength(len));
        }
        let mut grid = Self::new();
        for (pos, c) in Position::ALL.into_iter().zip(s.chars()) {
            let cell = match c {
                '.' => None,
                _ => Some(Symbol::from_char(c).ok_or(ParseGridError::BadChar(c))?),
            };
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}

/// The mutability role of a cell for one puzzle instance.
///
/// Roles are assigned once when a puzzle loads and never change during a
/// session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellRole {
    /// Pre-filled by the generator; immutable during play.
    Fixed,
    /// Player-editable.
    #[default]
    Free,
}

/// A per-cell map of [`CellRole`]s derived from a problem grid.
///
/// # Examples
///
/// ```
/// use tango_core::{CellRole, Grid, Position, RoleGrid};
///
/// let problem: Grid = "A...................................".parse()?;
/// let roles = RoleGrid::from_problem(&problem);
/// assert_eq!(roles.get(Position::new(0, 0)), CellRole::Fixed);
/// assert_eq!(roles.get(Position::new(0, 1)), CellRole::Free);
/// # Ok::<(), tango_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGrid {
    roles: [CellRole; CELLS],
}

impl RoleGrid {
    /// Derives roles from a problem grid: filled cells are fixed, empty
    /// cells are free.
    #[must_use]
    pub fn from_problem(problem: &Grid) -> Self {
        let mut roles = [CellRole::Free; CELLS];
        for (pos, _) in problem.filled_cells() {
            roles[pos.index()] = CellRole::Fixed;
        }
        Self { roles }
    }

    /// Returns the role of the cell at the given position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> CellRole {
        self.roles[pos.index()]
    }

    /// Returns `true` if the cell at the given position is fixed.
    #[must_use]
    pub const fn is_fixed(&self, pos: Position) -> bool {
        matches!(self.get(pos), CellRole::Fixed)
    }
}
