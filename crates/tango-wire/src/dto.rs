//! Wire representations of grids and hints.
//!
//! Uses the compact JSON shapes of the puzzle protocol: a grid is six rows
//! of six `null | "A" | "B"` values, and hints are two string-keyed maps,
//! one per direction. String keys exist only here; conversion into the
//! typed core structures is checked.

use std::collections::BTreeMap;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tango_core::{Grid, HintDirection, HintKey, HintSet, HintValue, Position, SIDE, Symbol};

/// Wire form of a cell symbol; `"A"` is a sun, `"B"` a moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolDto {
    /// `"A"`.
    #[serde(rename = "A")]
    Sun,
    /// `"B"`.
    #[serde(rename = "B")]
    Moon,
}

impl From<Symbol> for SymbolDto {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Sun => Self::Sun,
            Symbol::Moon => Self::Moon,
        }
    }
}

impl From<SymbolDto> for Symbol {
    fn from(dto: SymbolDto) -> Self {
        match dto {
            SymbolDto::Sun => Self::Sun,
            SymbolDto::Moon => Self::Moon,
        }
    }
}

/// Wire form of a board: 6 rows of 6 `null | "A" | "B"` cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridDto {
    rows: [[Option<SymbolDto>; SIDE]; SIDE],
}

impl GridDto {
    /// Returns the wire value at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<SymbolDto> {
        self.rows[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Sets the wire value at `pos`.
    pub fn set(&mut self, pos: Position, value: Option<SymbolDto>) {
        self.rows[usize::from(pos.row())][usize::from(pos.col())] = value;
    }
}

impl From<&Grid> for GridDto {
    fn from(grid: &Grid) -> Self {
        let mut dto = Self::default();
        for (pos, symbol) in grid.filled_cells() {
            dto.set(pos, Some(symbol.into()));
        }
        dto
    }
}

impl From<&GridDto> for Grid {
    fn from(dto: &GridDto) -> Self {
        let mut grid = Self::new();
        for pos in Position::ALL {
            grid.set(pos, dto.get(pos).map(Symbol::from));
        }
        grid
    }
}

/// Wire form of a hint value; `"="` means equal, `"X"` means different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintValueDto {
    /// `"="`.
    #[serde(rename = "=")]
    Equal,
    /// `"X"`.
    #[serde(rename = "X")]
    Different,
}

impl From<HintValue> for HintValueDto {
    fn from(value: HintValue) -> Self {
        match value {
            HintValue::Equal => Self::Equal,
            HintValue::Different => Self::Different,
        }
    }
}

impl From<HintValueDto> for HintValue {
    fn from(dto: HintValueDto) -> Self {
        match dto {
            HintValueDto::Equal => Self::Equal,
            HintValueDto::Different => Self::Different,
        }
    }
}

/// An error converting wire hints into the typed hint set.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WireError {
    /// A hint key is not a `"row,col"` pair of integers.
    #[display("malformed hint key: {key:?}")]
    MalformedKey {
        /// The offending key.
        key: String,
    },
    /// A hint key names a cell outside the board or one without a neighbor
    /// in the hint's direction.
    #[display("hint key out of range: {key:?}")]
    KeyOutOfRange {
        /// The offending key.
        key: String,
    },
}

/// Wire form of a hint set: two `"row,col"` keyed maps, one per direction.
///
/// Each entry constrains the named cell and its right (horizontal) or down
/// (vertical) neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintsDto {
    /// Hints between a cell and its right neighbor.
    #[serde(default)]
    pub horizontal: BTreeMap<String, HintValueDto>,
    /// Hints between a cell and its down neighbor.
    #[serde(default)]
    pub vertical: BTreeMap<String, HintValueDto>,
}

impl HintsDto {
    /// Converts the string-keyed maps into a typed [`HintSet`].
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MalformedKey`] for keys that do not parse as a
    /// `"row,col"` pair and [`WireError::KeyOutOfRange`] for keys naming a
    /// cell off the board or on the board's last row/column for the map's
    /// direction. Bad keys are rejected, never skipped.
    pub fn to_hint_set(&self) -> Result<HintSet, WireError> {
        let mut hints = HintSet::new();
        let maps = [
            (HintDirection::Horizontal, &self.horizontal),
            (HintDirection::Vertical, &self.vertical),
        ];
        for (direction, entries) in maps {
            for (raw, &value) in entries {
                let pos = parse_key(raw)?;
                let key =
                    HintKey::try_new(pos, direction).ok_or_else(|| WireError::KeyOutOfRange {
                        key: raw.clone(),
                    })?;
                hints.insert(key, value.into());
            }
        }
        Ok(hints)
    }

    /// Builds the wire maps from a typed [`HintSet`].
    #[must_use]
    pub fn from_hint_set(hints: &HintSet) -> Self {
        let mut dto = Self::default();
        for (key, value) in hints.iter() {
            let pos = key.position();
            let raw = format!("{},{}", pos.row(), pos.col());
            let map = match key.direction() {
                HintDirection::Horizontal => &mut dto.horizontal,
                HintDirection::Vertical => &mut dto.vertical,
            };
            map.insert(raw, value.into());
        }
        dto
    }
}

fn parse_key(raw: &str) -> Result<Position, WireError> {
    let malformed = || WireError::MalformedKey {
        key: raw.to_owned(),
    };
    let (row, col) = raw.split_once(',').ok_or_else(malformed)?;
    let row: u8 = row.parse().map_err(|_| malformed())?;
    let col: u8 = col.parse().map_err(|_| malformed())?;
    Position::try_new(row, col).ok_or_else(|| WireError::KeyOutOfRange {
        key: raw.to_owned(),
    })
}
