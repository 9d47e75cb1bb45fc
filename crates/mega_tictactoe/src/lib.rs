//! Mega tic-tac-toe rules engine.
//!
//! A 3x3 grid of 3x3 sub-boards. Winning a sub-board claims a cell of the
//! outer board, and the cell played decides which sub-board the opponent
//! must play in next.
//!
//! # Architecture
//!
//! - **Board**: nested cell ownership, sub-board outcomes, legality and
//!   win/draw detection at both levels.
//! - **GameSession**: whose turn, forced sub-board, winner and turn counter,
//!   driven one authoritative move at a time.
//! - **Snapshot**: the plain persisted field set of a session.
//! - **MoveSource / SaveSink**: capabilities a host injects.
//!
//! # Example
//!
//! ```
//! use mega_tictactoe::{ForcedBoard, GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.accept_move(0, 0, 1, 1).unwrap();
//! assert_eq!(session.current_player(), Player::Player2);
//! assert_eq!(session.forced_sub_board(), ForcedBoard::At(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod persistence;
mod players;
mod position;
mod session;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Session management
pub use session::GameSession;
pub use snapshot::Snapshot;

// Crate-level exports - Game types
pub use action::Move;
pub use position::Position;
pub use types::{Cell, ForcedBoard, GameStatus, Player, SubBoardOutcome};

// Crate-level exports - Errors
pub use error::{MoveError, SaveError, SnapshotError};

// Crate-level exports - Collaborators
pub use persistence::SaveSink;
pub use players::MoveSource;
