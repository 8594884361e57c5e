//! Board positions and position sets.

use std::fmt::{self, Display};

use crate::SIDE;

/// A cell position on the 6×6 board.
///
/// Both coordinates are always in the range 0-5; out-of-range coordinates are
/// a programming error and are rejected by an assertion at construction.
/// Use [`Position::try_new`] when parsing untrusted input.
///
/// # Examples
///
/// ```
/// use tango_core::Position;
///
/// let pos = Position::new(2, 4);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 4);
///
/// // Iterate over the whole board in row-major order
/// assert_eq!(Position::ALL.len(), 36);
/// assert_eq!(Position::ALL[0], Position::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing every board position in row-major order.
    pub const ALL: [Self; 36] = {
        let mut all = [Self { row: 0, col: 0 }; 36];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 36 {
            all[i] = Self {
                row: (i / SIDE) as u8,
                col: (i % SIDE) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-5.
    ///
    /// # Examples
    ///
    /// ```
    /// use tango_core::Position;
    ///
    /// let pos = Position::new(0, 5);
    /// assert_eq!(pos.col(), 5);
    /// ```
    ///
    /// ```should_panic
    /// use tango_core::Position;
    ///
    /// // This will panic
    /// let _ = Position::new(0, 6);
    /// ```
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            usize::from(row) < SIDE && usize::from(col) < SIDE,
            "position out of range: ({row}, {col})"
        );
        Self { row, col }
    }

    /// Creates a position, returning `None` when a coordinate is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tango_core::Position;
    ///
    /// assert_eq!(Position::try_new(5, 5), Some(Position::new(5, 5)));
    /// assert_eq!(Position::try_new(6, 0), None);
    /// ```
    #[must_use]
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        (usize::from(row) < SIDE && usize::from(col) < SIDE).then_some(Self { row, col })
    }

    /// Returns the row coordinate (0-5).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-5).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index of this position (0-35).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIDE + self.col as usize
    }

    /// Returns the neighbor one step to the right, if any.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        Self::try_new(self.row, self.col + 1)
    }

    /// Returns the neighbor one step down, if any.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        Self::try_new(self.row + 1, self.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A set of board positions backed by a 36-bit mask.
///
/// Insertion is idempotent, so accumulating rule violations into a
/// `PositionSet` deduplicates them for free.
///
/// # Examples
///
/// ```
/// use tango_core::{Position, PositionSet};
///
/// let mut set = PositionSet::EMPTY;
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(0, 0));
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionSet {
    bits: u64,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Adds a position to the set.
    pub fn insert(&mut self, pos: Position) {
        self.bits |= 1 << pos.index();
    }

    /// Returns `true` if the set contains the position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns an iterator over the positions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
