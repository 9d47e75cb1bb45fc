//! Core domain types for mega tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// Player 1 (moves first).
    Player1,
    /// Player 2 (moves second).
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Numeric id used by save files (1 or 2).
    pub fn number(self) -> i8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }

    /// Parses a numeric id (1 or 2).
    pub fn from_number(n: i8) -> Option<Self> {
        match n {
            1 => Some(Player::Player1),
            2 => Some(Player::Player2),
            _ => None,
        }
    }
}

/// A single cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell owned by a player.
    Owner(Player),
}

impl Cell {
    /// True if the cell belongs to `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Owner(player)
    }
}

/// Outcome of one of the nine sub-boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubBoardOutcome {
    /// Still accepting moves.
    #[default]
    Undecided,
    /// A player completed a line.
    Won(Player),
    /// All nine cells filled without a line.
    Drawn,
}

impl SubBoardOutcome {
    /// A claimed sub-board no longer accepts moves.
    pub fn is_claimed(self) -> bool {
        self != SubBoardOutcome::Undecided
    }

    /// Returns the player who won this sub-board, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            SubBoardOutcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Constraint on where the next move may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForcedBoard {
    /// Any playable sub-board.
    #[default]
    Anywhere,
    /// Only the sub-board at this outer position.
    At(Position),
}

impl ForcedBoard {
    /// True if a move into the sub-board at `outer` satisfies the constraint.
    pub fn permits(self, outer: Position) -> bool {
        match self {
            ForcedBoard::Anywhere => true,
            ForcedBoard::At(forced) => forced == outer,
        }
    }
}

/// Overall state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner on the outer board.
    Won(Player),
    /// Every sub-board is claimed and nobody won.
    Drawn,
}

impl GameStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
