//! Bot that picks uniformly among legal moves.

use mega_tictactoe::{Board, ForcedBoard, Move, MoveSource};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Plays a uniformly random legal move.
///
/// Seeded bots are reproducible, which keeps bot-vs-bot games testable.
pub struct RandomPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a random bot, seeded from `seed` or from OS entropy.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl MoveSource for RandomPlayer {
    fn get_move(&mut self, forced: ForcedBoard, board: &Board) -> Option<Move> {
        let moves: Vec<Move> = board.legal_moves(forced).collect();
        let mv = moves.choose(&mut self.rng).copied();
        debug!(bot = %self.name, options = moves.len(), ?mv, "Bot chose move");
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
    fn test_move_is_legal() {
        let board = Board::new();
        let mut bot = RandomPlayer::new("bot", Some(7));
        for _ in 0..20 {
            let mv = bot.get_move(ForcedBoard::At(Position::BottomLeft), &board).unwrap();
            assert_eq!(mv.outer, Position::BottomLeft);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomPlayer::new("a", Some(42));
        let mut b = RandomPlayer::new("b", Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.get_move(ForcedBoard::Anywhere, &board),
                b.get_move(ForcedBoard::Anywhere, &board)
            );
        }
    }

    #[test]
    fn test_no_legal_moves() {
        let mut board = Board::new();
        for ix in 0..3 {
            board.place(mega_tictactoe::Player::Player2, 0, 0, ix, 0).unwrap();
        }
        let mut bot = RandomPlayer::new("bot", Some(1));
        assert_eq!(bot.get_move(ForcedBoard::At(Position::TopLeft), &board), None);
    }
}
