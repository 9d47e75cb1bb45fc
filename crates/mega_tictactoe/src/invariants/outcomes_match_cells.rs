//! Sub-board outcomes agree with the cells underneath them.

use super::Invariant;
use crate::position::Position;
use crate::rules;
use crate::session::GameSession;

/// Invariant: every recorded sub-board outcome is the one its cells imply.
pub struct OutcomesMatchCellsInvariant;

impl Invariant<GameSession> for OutcomesMatchCellsInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        Position::ALL.iter().all(|&outer| {
            rules::classify(board.sub_board(outer)) == Some(board.sub_board_outcome(outer))
        })
    }

    fn description() -> &'static str {
        "Sub-board outcomes match their cells"
    }
}
