//! First-class move type.
//!
//! A move names a sub-board on the outer board and a cell inside it.
//! Raw coordinates from move sources are converted here, which is where
//! out-of-range input is rejected before any board state is read.

use crate::error::MoveError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a cell inside one of the nine sub-boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sub-board on the outer board.
    pub outer: Position,
    /// Cell inside that sub-board.
    pub inner: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(outer: Position, inner: Position) -> Self {
        Self { outer, inner }
    }

    /// Builds a move from raw `(outer_x, outer_y, inner_x, inner_y)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if any coordinate is outside `0..3`.
    #[instrument]
    pub fn from_coords(
        outer_x: usize,
        outer_y: usize,
        inner_x: usize,
        inner_y: usize,
    ) -> Result<Self, MoveError> {
        let out_of_bounds = MoveError::OutOfBounds {
            outer_x,
            outer_y,
            inner_x,
            inner_y,
        };
        let outer = Position::from_xy(outer_x, outer_y).ok_or(out_of_bounds.clone())?;
        let inner = Position::from_xy(inner_x, inner_y).ok_or(out_of_bounds)?;
        Ok(Self { outer, inner })
    }

    /// Returns the move as `(outer_x, outer_y, inner_x, inner_y)`.
    pub fn coords(&self) -> (usize, usize, usize, usize) {
        (self.outer.x(), self.outer.y(), self.inner.x(), self.inner.y())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (ox, oy, ix, iy) = self.coords();
        write!(f, "({}, {}) / ({}, {})", ox + 1, oy + 1, ix + 1, iy + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords() {
        let mv = Move::from_coords(2, 0, 1, 1).unwrap();
        assert_eq!(mv.outer, Position::TopRight);
        assert_eq!(mv.inner, Position::Center);
        assert_eq!(mv.coords(), (2, 0, 1, 1));
    }

    #[test]
    fn test_from_coords_rejects_any_out_of_range() {
        for coords in [(3, 0, 0, 0), (0, 3, 0, 0), (0, 0, 3, 0), (0, 0, 0, 7)] {
            let (ox, oy, ix, iy) = coords;
            assert!(matches!(
                Move::from_coords(ox, oy, ix, iy),
                Err(MoveError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_display_is_one_based() {
        let mv = Move::new(Position::TopLeft, Position::BottomRight);
        assert_eq!(mv.to_string(), "(1, 1) / (3, 3)");
    }
}
