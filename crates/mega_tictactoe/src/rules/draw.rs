//! Full-grid detection.

use crate::position::Position;

/// Returns true if `occupied` holds for all nine positions.
pub fn is_filled(occupied: impl Fn(Position) -> bool) -> bool {
    Position::ALL.iter().all(|&pos| occupied(pos))
}
