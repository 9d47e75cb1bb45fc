//! Move sources.
//!
//! A move source decides the current player's move from a read-only view of
//! the board and the forced sub-board. Humans, bots and scripted tests all
//! plug in through [`MoveSource`].

use crate::action::Move;
use crate::board::Board;
use crate::types::ForcedBoard;

/// Anything that can pick a move for a player.
pub trait MoveSource: Send {
    /// Picks a move, or returns `None` to quit the game.
    ///
    /// The session still validates the move; a rejected move is offered
    /// back to the same source.
    fn get_move(&mut self, forced: ForcedBoard, board: &Board) -> Option<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
