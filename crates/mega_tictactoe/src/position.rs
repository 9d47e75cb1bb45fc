//! Positions inside a 3x3 grid.
//!
//! The same type addresses a sub-board on the outer board and a cell
//! inside a sub-board, so both levels share one coordinate system:
//! `x` is the column, `y` is the row, both in `0..3`.

use serde::{Deserialize, Serialize};

/// A position on a 3x3 grid, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (x 0, y 0)
    TopLeft,
    /// Top-center (x 1, y 0)
    TopCenter,
    /// Top-right (x 2, y 0)
    TopRight,
    /// Middle-left (x 0, y 1)
    MiddleLeft,
    /// Center (x 1, y 1)
    Center,
    /// Middle-right (x 2, y 1)
    MiddleRight,
    /// Bottom-left (x 0, y 2)
    BottomLeft,
    /// Bottom-center (x 1, y 2)
    BottomCenter,
    /// Bottom-right (x 2, y 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
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

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
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

    /// Converts position to grid index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from column and row. Returns `None` outside `0..3`.
    pub fn from_xy(x: usize, y: usize) -> Option<Self> {
        if x < 3 && y < 3 {
            Self::from_index(y * 3 + x)
        } else {
            None
        }
    }

    /// Column (0-2).
    pub fn x(self) -> usize {
        self.index() % 3
    }

    /// Row (0-2).
    pub fn y(self) -> usize {
        self.index() / 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
