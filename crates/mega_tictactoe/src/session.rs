//! Turn sequencing for a single game.

use crate::action::Move;
use crate::board::Board;
use crate::error::MoveError;
use crate::types::{ForcedBoard, GameStatus, Player, SubBoardOutcome};
use tracing::{debug, info, instrument, warn};

/// Authoritative state of one game.
///
/// The session owns its [`Board`] and is only mutated through
/// [`GameSession::accept_move`], which either applies every update or none.
/// Hosts that share a session between actors must serialize calls to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) forced: ForcedBoard,
    pub(crate) winner: Option<Player>,
    pub(crate) turn_count: u32,
    pub(crate) test_mode: bool,
    pub(crate) mode: u8,
    pub(crate) last_move: Option<Move>,
}

impl GameSession {
    /// Creates a fresh game: empty board, Player 1 to move, free placement.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            current_player: Player::Player1,
            forced: ForcedBoard::Anywhere,
            winner: None,
            turn_count: 0,
            test_mode: false,
            mode: 0,
            last_move: None,
        }
    }

    /// Enables test mode: forced routing is ignored and players never rotate.
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Records the host's opponent category so it survives a save.
    pub fn with_mode(mut self, mode: u8) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move is awaited.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Sub-board constraint for the next move.
    pub fn forced_sub_board(&self) -> ForcedBoard {
        self.forced
    }

    /// Winner of the game, once decided.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Number of accepted moves.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Whether test mode is enabled.
    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Host-defined opponent category.
    pub fn mode(&self) -> u8 {
        self.mode
    }

    /// Most recently accepted move in this process.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if self.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Moves the current player may make.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board.legal_moves(self.forced)
    }

    /// Accepts a move for the current player from raw coordinates.
    ///
    /// Returns the accepted move.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] before anything else, then the errors of
    /// [`GameSession::accept`].
    pub fn accept_move(
        &mut self,
        outer_x: usize,
        outer_y: usize,
        inner_x: usize,
        inner_y: usize,
    ) -> Result<Move, MoveError> {
        let mv = Move::from_coords(outer_x, outer_y, inner_x, inner_y)?;
        self.accept(mv)
    }

    /// Accepts a move for the current player.
    ///
    /// On success the turn counter advances, the winner is recorded if the
    /// move completed a line of sub-boards, the next sub-board is routed from
    /// the move's inner position, and the other player is up. Rotation is
    /// skipped in test mode and after the move that ends the game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::WrongForcedBoard`] if the move ignores the forced sub-board.
    /// - [`MoveError::SubBoardClaimed`] / [`MoveError::CellOccupied`] from the board.
    #[instrument(skip(self), fields(player = ?self.current_player, turn = self.turn_count))]
    pub fn accept(&mut self, mv: Move) -> Result<Move, MoveError> {
        if self.is_over() {
            warn!(%mv, "Move offered after game over");
            return Err(MoveError::GameOver);
        }

        if !self.test_mode
            && let ForcedBoard::At(required) = self.forced
            && required != mv.outer
        {
            warn!(%mv, %required, "Move ignores forced sub-board");
            return Err(MoveError::WrongForcedBoard {
                required,
                attempted: mv.outer,
            });
        }

        let player = self.current_player;
        let outcome = self.board.place_move(player, mv).inspect_err(|e| {
            warn!(%mv, error = %e, "Board rejected move");
        })?;

        self.turn_count += 1;
        self.last_move = Some(mv);

        if outcome == SubBoardOutcome::Won(player) && self.board.overall_winner(player) {
            info!(?player, turns = self.turn_count, "Game won");
            self.winner = Some(player);
        }

        self.forced = if !self.test_mode && self.board.sub_board_is_playable(mv.inner) {
            ForcedBoard::At(mv.inner)
        } else {
            ForcedBoard::Anywhere
        };

        match self.status() {
            GameStatus::InProgress if !self.test_mode => {
                self.current_player = player.opponent();
            }
            GameStatus::Drawn => info!(turns = self.turn_count, "Game drawn"),
            _ => {}
        }

        debug!(
            %mv,
            forced = ?self.forced,
            next = ?self.current_player,
            "Move accepted"
        );

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};
            debug_assert!(
                SessionInvariants::check_all(self).is_ok(),
                "session invariants violated after {mv}"
            );
        }

        Ok(mv)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_initial_state() {
        let session = GameSession::new();
        assert_eq!(session.current_player(), Player::Player1);
        assert_eq!(session.forced_sub_board(), ForcedBoard::Anywhere);
        assert_eq!(session.winner(), None);
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = GameSession::new();
        session.accept_move(0, 0, 0, 0).unwrap();
        let before = session.clone();

        assert!(session.accept_move(0, 0, 0, 0).is_err());
        assert!(session.accept_move(1, 1, 0, 0).is_err());
        assert!(session.accept_move(0, 0, 9, 0).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_test_mode_keeps_player_and_frees_routing() {
        let mut session = GameSession::new().with_test_mode(true);
        session.accept_move(0, 0, 1, 1).unwrap();
        assert_eq!(session.current_player(), Player::Player1);
        assert_eq!(session.forced_sub_board(), ForcedBoard::Anywhere);
        session.accept_move(2, 2, 0, 0).unwrap();
        assert_eq!(session.turn_count(), 2);
    }

    #[test]
    fn test_session_legal_moves_follow_forced_board() {
        let mut session = GameSession::new();
        session.accept_move(0, 0, 2, 2).unwrap();
        assert!(session.legal_moves().all(|m| m.outer == Position::BottomRight));
        assert_eq!(session.legal_moves().count(), 9);
    }
}
