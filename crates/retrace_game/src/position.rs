//! Board positions and their human-readable locations.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A position on the board (index 0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

/// 1-based (row, column) location of a position, rendered as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct Location {
    /// Row, 1 at the top.
    pub row: usize,
    /// Column, 1 at the left.
    pub col: usize,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts to a board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from 1-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
            return None;
        }
        Self::from_index((row - 1) * 3 + (col - 1))
    }

    /// 1-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }

    /// 1-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// 1-based (row, column) location.
    pub fn location(self) -> Location {
        Location {
            row: self.row(),
            col: self.col(),
        }
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_location_formatting() {
        assert_eq!(Position::TopLeft.location().to_string(), "(1, 1)");
        assert_eq!(Position::MiddleRight.location().to_string(), "(2, 3)");
        assert_eq!(Position::BottomCenter.location().to_string(), "(3, 2)");
        assert_eq!(Position::BottomRight.location().to_string(), "(3, 3)");
    }

    #[test]
    fn test_from_row_col() {
        assert_eq!(Position::from_row_col(2, 2), Some(Position::Center));
        assert_eq!(Position::from_row_col(3, 1), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(0, 1), None);
        assert_eq!(Position::from_row_col(1, 4), None);
    }
}
