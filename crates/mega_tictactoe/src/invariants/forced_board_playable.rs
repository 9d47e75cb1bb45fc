//! A forced sub-board can always be played in.

use super::Invariant;
use crate::session::GameSession;
use crate::types::ForcedBoard;

/// Invariant: the session never routes a player into a claimed sub-board.
pub struct ForcedBoardPlayableInvariant;

impl Invariant<GameSession> for ForcedBoardPlayableInvariant {
    fn holds(session: &GameSession) -> bool {
        match session.forced_sub_board() {
            ForcedBoard::Anywhere => true,
            ForcedBoard::At(outer) => session.board().sub_board_is_playable(outer),
        }
    }

    fn description() -> &'static str {
        "Forced sub-board is playable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_routing_to_claimed_board_violates() {
        let mut session = GameSession::new().with_test_mode(true);
        for ix in 0..3 {
            session.accept_move(1, 1, ix, 2).unwrap();
        }
        assert!(ForcedBoardPlayableInvariant::holds(&session));

        session.forced = ForcedBoard::At(Position::Center);
        assert!(!ForcedBoardPlayableInvariant::holds(&session));
    }
}
