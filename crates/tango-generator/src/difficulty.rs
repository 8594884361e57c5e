//! Puzzle difficulty levels.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The difficulty of a generated puzzle.
///
/// Difficulty controls how many cells the generator pre-fills: fewer givens
/// leave more deduction to the player.
///
/// # Examples
///
/// ```
/// use tango_generator::Difficulty;
///
/// let difficulty: Difficulty = "medium".parse()?;
/// assert_eq!(difficulty, Difficulty::Medium);
/// assert_eq!(difficulty.starting_cells(), 10);
/// # Ok::<(), tango_generator::ParseDifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 14 starting cells.
    Easy,
    /// 10 starting cells.
    #[default]
    Medium,
    /// 8 starting cells.
    Hard,
}

impl Difficulty {
    /// Array containing all difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells the generator pre-fills.
    #[must_use]
    pub const fn starting_cells(self) -> usize {
        match self {
            Self::Easy => 14,
            Self::Medium => 10,
            Self::Hard => 8,
        }
    }

    /// Returns the lowercase wire name (`easy`, `medium`, `hard`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    name: String,
}

impl Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {:?}", self.name)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>(), Ok(difficulty));
            assert_eq!(format!("{difficulty}"), difficulty.as_str());
        }
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_fewer_givens_at_higher_difficulty() {
        assert!(Difficulty::Easy.starting_cells() > Difficulty::Medium.starting_cells());
        assert!(Difficulty::Medium.starting_cells() > Difficulty::Hard.starting_cells());
    }
}
