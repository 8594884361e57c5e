//! Equality/inequality hints between adjacent cells.

use std::fmt::{self, Display};

use crate::{Position, SIDE};

/// The direction of a hint relative to its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintDirection {
    /// Links `(r, c)` with `(r, c + 1)`.
    Horizontal,
    /// Links `(r, c)` with `(r + 1, c)`.
    Vertical,
}

/// The relation a hint imposes on its two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintValue {
    /// Both cells must hold the same symbol (wire name `"="`).
    Equal,
    /// The cells must hold different symbols (wire name `"X"`).
    Different,
}

impl Display for HintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "="),
            Self::Different => write!(f, "X"),
        }
    }
}

/// A structured key identifying one hint slot: the first cell plus a
/// direction.
///
/// The first cell must have a neighbor in the hint direction, so horizontal
/// keys require `col < 5` and vertical keys require `row < 5`. String keys
/// like `"row,col"` exist only at the wire boundary; everything else works
/// with this typed key.
///
/// # Examples
///
/// ```
/// use tango_core::{HintDirection, HintKey, Position};
///
/// let key = HintKey::new(Position::new(1, 2), HintDirection::Horizontal);
/// let (a, b) = key.cells();
/// assert_eq!(a, Position::new(1, 2));
/// assert_eq!(b, Position::new(1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HintKey {
    pos: Position,
    direction: HintDirection,
}

impl HintKey {
    /// Creates a hint key.
    ///
    /// # Panics
    ///
    /// Panics if the first cell has no neighbor in the hint direction.
    #[must_use]
    pub fn new(pos: Position, direction: HintDirection) -> Self {
        Self::try_new(pos, direction)
            .unwrap_or_else(|| panic!("hint at {pos} has no {direction:?} neighbor"))
    }

    /// Creates a hint key, returning `None` when the first cell has no
    /// neighbor in the hint direction.
    #[must_use]
    pub fn try_new(pos: Position, direction: HintDirection) -> Option<Self> {
        let in_range = match direction {
            HintDirection::Horizontal => (pos.col() as usize) < SIDE - 1,
            HintDirection::Vertical => (pos.row() as usize) < SIDE - 1,
        };
        in_range.then_some(Self { pos, direction })
    }

    /// Returns the first cell of the linked pair.
    #[must_use]
    pub const fn position(self) -> Position {
        self.pos
    }

    /// Returns the hint direction.
    #[must_use]
    pub const fn direction(self) -> HintDirection {
        self.direction
    }

    /// Returns both linked cells, first cell first.
    #[must_use]
    pub fn cells(self) -> (Position, Position) {
        let second = match self.direction {
            HintDirection::Horizontal => self.pos.right(),
            HintDirection::Vertical => self.pos.down(),
        };
        // try_new guarantees the neighbor exists
        (self.pos, second.unwrap())
    }

    fn slot(self) -> usize {
        let row = usize::from(self.pos.row());
        let col = usize::from(self.pos.col());
        match self.direction {
            HintDirection::Horizontal => row * (SIDE - 1) + col,
            HintDirection::Vertical => col * (SIDE - 1) + row,
        }
    }
}

const SLOTS: usize = SIDE * (SIDE - 1);

/// The immutable hint set supplied by the generator with a puzzle.
///
/// Backed by fixed-size slot arrays, one per direction; each slot holds at
/// most one [`HintValue`].
///
/// # Examples
///
/// ```
/// use tango_core::{HintDirection, HintKey, HintSet, HintValue, Position};
///
/// let mut hints = HintSet::new();
/// let key = HintKey::new(Position::new(0, 0), HintDirection::Horizontal);
/// hints.insert(key, HintValue::Equal);
///
/// assert_eq!(hints.get(key), Some(HintValue::Equal));
/// assert_eq!(hints.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintSet {
    horizontal: [Option<HintValue>; SLOTS],
    vertical: [Option<HintValue>; SLOTS],
}

impl HintSet {
    /// Creates an empty hint set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            horizontal: [None; SLOTS],
            vertical: [None; SLOTS],
        }
    }

    fn slots(&self, direction: HintDirection) -> &[Option<HintValue>; SLOTS] {
        match direction {
            HintDirection::Horizontal => &self.horizontal,
            HintDirection::Vertical => &self.vertical,
        }
    }

    /// Adds or replaces a hint.
    pub fn insert(&mut self, key: HintKey, value: HintValue) {
        let slots = match key.direction() {
            HintDirection::Horizontal => &mut self.horizontal,
            HintDirection::Vertical => &mut self.vertical,
        };
        slots[key.slot()] = Some(value);
    }

    /// Returns the hint stored under the given key, if any.
    #[must_use]
    pub fn get(&self, key: HintKey) -> Option<HintValue> {
        self.slots(key.direction())[key.slot()]
    }

    /// Returns the number of hints in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the set contains no hints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all `(HintKey, HintValue)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (HintKey, HintValue)> {
        all_keys().filter_map(|key| self.get(key).map(|value| (key, value)))
    }
}

/// Returns an iterator over every valid hint key on the board.
pub fn all_keys() -> impl Iterator<Item = HintKey> {
    let horizontal = Position::ALL
        .into_iter()
        .filter_map(|pos| HintKey::try_new(pos, HintDirection::Horizontal));
    let vertical = Position::ALL
        .into_iter()
        .filter_map(|pos| HintKey::try_new(pos, HintDirection::Vertical));
    horizontal.chain(vertical)
}
