//! Error types for moves, snapshots and persistence.

use crate::position::Position;
use derive_more::{Display, Error};

/// Reason a move was rejected.
///
/// Every variant is recoverable: the board and session are left
/// untouched and the caller is expected to offer another move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// A coordinate was outside `0..3`.
    #[display("Coordinates ({outer_x}, {outer_y}, {inner_x}, {inner_y}) are out of bounds")]
    OutOfBounds {
        /// Outer column as given.
        outer_x: usize,
        /// Outer row as given.
        outer_y: usize,
        /// Inner column as given.
        inner_x: usize,
        /// Inner row as given.
        inner_y: usize,
    },

    /// The target cell is already owned.
    #[display("Cell {inner} of sub-board {outer} is already occupied")]
    CellOccupied {
        /// Sub-board of the move.
        outer: Position,
        /// Occupied cell.
        inner: Position,
    },

    /// The target sub-board is already won or drawn.
    #[display("Sub-board {_0} is already claimed")]
    SubBoardClaimed(#[error(not(source))] Position),

    /// The move ignores the sub-board the player was sent to.
    #[display("Must play in sub-board {required}, not {attempted}")]
    WrongForcedBoard {
        /// Sub-board the player was sent to.
        required: Position,
        /// Sub-board the move targeted.
        attempted: Position,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// A persisted snapshot that cannot be turned back into a session.
#[derive(Debug, Clone, Display, Error)]
#[display("Malformed snapshot: {} at {}:{}", message, file, line)]
pub struct SnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SnapshotError {
    /// Creates a new snapshot error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A save sink failed to persist a snapshot.
#[derive(Debug, Clone, Display, Error)]
#[display("Save error: {} at {}:{}", message, file, line)]
pub struct SaveError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveError {
    /// Creates a new save error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SaveError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
