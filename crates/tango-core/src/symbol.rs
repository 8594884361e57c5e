//! Puzzle symbol representation.

use std::fmt::{self, Display};

/// One of the two Tango puzzle symbols.
///
/// A Tango grid is filled with exactly two symbols, rendered as a sun and a
/// moon. Cells hold `Option<Symbol>`, with `None` meaning the cell is still
/// empty.
///
/// # Examples
///
/// ```
/// use tango_core::Symbol;
///
/// let symbol = Symbol::Sun;
/// assert_eq!(symbol.opposite(), Symbol::Moon);
///
/// // Iterate over both symbols
/// for symbol in Symbol::ALL {
///     println!("{}", symbol);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// The sun symbol (wire name `"A"`).
    Sun,
    /// The moon symbol (wire name `"B"`).
    Moon,
}

impl Symbol {
    /// Array containing both symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use tango_core::Symbol;
    ///
    /// assert_eq!(Symbol::ALL.len(), 2);
    /// assert_eq!(Symbol::ALL[0], Symbol::Sun);
    /// ```
    pub const ALL: [Self; 2] = [Self::Sun, Self::Moon];

    /// Returns the other symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use tango_core::Symbol;
    ///
    /// assert_eq!(Symbol::Sun.opposite(), Symbol::Moon);
    /// assert_eq!(Symbol::Moon.opposite(), Symbol::Sun);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Sun => Self::Moon,
            Self::Moon => Self::Sun,
        }
    }

    /// Returns the single-character form used by [`Grid`](crate::Grid)
    /// parsing and display (`A` for sun, `B` for moon).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Sun => 'A',
            Self::Moon => 'B',
        }
    }

    /// Creates a symbol from its single-character form.
    ///
    /// Returns `None` for any character other than `A` or `B`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tango_core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('A'), Some(Symbol::Sun));
    /// assert_eq!(Symbol::from_char('B'), Some(Symbol::Moon));
    /// assert_eq!(Symbol::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Sun),
            'B' => Some(Self::Moon),
            _ => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Symbol::ALL.len(), 2);
        assert_ne!(Symbol::Sun, Symbol::Moon);

        // opposite is an involution
        for symbol in Symbol::ALL {
            assert_eq!(symbol.opposite().opposite(), symbol);
        }

        // char round-trip
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
        }

        assert_eq!(format!("{}", Symbol::Sun), "A");
        assert_eq!(format!("{}", Symbol::Moon), "B");
    }
}
