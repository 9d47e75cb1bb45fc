//! Bot that picks the first legal move.

use mega_tictactoe::{Board, ForcedBoard, Move, MoveSource};
use tracing::debug;

/// Plays the first legal move in row-major order.
pub struct FirstAvailablePlayer {
    name: String,
}

impl FirstAvailablePlayer {
    /// Creates a new first-move bot.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for FirstAvailablePlayer {
    fn get_move(&mut self, forced: ForcedBoard, board: &Board) -> Option<Move> {
        let mv = board.legal_moves(forced).next();
        debug!(bot = %self.name, ?mv, "Bot chose move");
        mv
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mega_tictactoe::Position;

    #[test]
    fn test_picks_first_empty_cell_of_forced_board() {
        let mut board = Board::new();
        board.place(mega_tictactoe::Player::Player1, 1, 1, 0, 0).unwrap();
        let mut bot = FirstAvailablePlayer::new("bot");
        let mv = bot.get_move(ForcedBoard::At(Position::Center), &board).unwrap();
        assert_eq!(mv, Move::new(Position::Center, Position::TopCenter));
    }
}
