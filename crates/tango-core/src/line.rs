//! Board lines (rows and columns).

use crate::{Position, SIDE};

/// A board line: one full row or one full column.
///
/// Rows and columns are the units over which the symbol-count rule applies.
///
/// # Examples
///
/// ```
/// use tango_core::{Line, Position};
///
/// let row = Line::Row { row: 2 };
/// let positions: Vec<_> = row.positions().collect();
/// assert_eq!(positions.len(), 6);
/// assert_eq!(positions[0], Position::new(2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// A row identified by its row coordinate (0-5).
    Row {
        /// Row index (0-5).
        row: u8,
    },
    /// A column identified by its column coordinate (0-5).
    Column {
        /// Column index (0-5).
        col: u8,
    },
}

impl Line {
    /// Array containing all rows (0-5).
    pub const ROWS: [Self; SIDE] = {
        let mut rows = [Self::Row { row: 0 }; SIDE];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < SIDE {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-5).
    pub const COLUMNS: [Self; SIDE] = {
        let mut cols = [Self::Column { col: 0 }; SIDE];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < SIDE {
            cols[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        cols
    };

    /// Array containing all lines in row, column order.
    pub const ALL: [Self; SIDE * 2] = {
        let mut all = [Self::Row { row: 0 }; SIDE * 2];
        let mut i = 0;
        while i < SIDE {
            all[i] = Self::ROWS[i];
            all[i + SIDE] = Self::COLUMNS[i];
            i += 1;
        }
        all
    };

    /// Returns an iterator over the six positions in this line, in board
    /// order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..SIDE as u8).map(move |i| match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { col } => Position::new(i, col),
        })
    }
}
