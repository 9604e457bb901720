//! Board coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A zero-based `(row, column)` coordinate.
///
/// Not range-checked on construction; the board accessors panic on
/// out-of-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPosition {
    pub row: usize,
    pub column: usize,
}

impl BoardPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        BoardPosition { row, column }
    }
}

impl From<(usize, usize)> for BoardPosition {
    fn from((row, column): (usize, usize)) -> Self {
        BoardPosition { row, column }
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        assert_eq!(BoardPosition::from((3, 1)), BoardPosition::new(3, 1));
    }

    #[test]
    fn display_format() {
        assert_eq!(BoardPosition::new(2, 4).to_string(), "(2, 4)");
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(BoardPosition::new(0, 5) < BoardPosition::new(1, 0));
        assert!(BoardPosition::new(1, 0) < BoardPosition::new(1, 1));
    }
}
