//! One accepted move, one owned cell.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the turn counter equals the number of owned cells.
pub struct TurnCountMatchesInvariant;

impl Invariant<GameSession> for TurnCountMatchesInvariant {
    fn holds(session: &GameSession) -> bool {
        session.board().occupied_count() == session.turn_count() as usize
    }

    fn description() -> &'static str {
        "Turn count equals the number of owned cells"
    }
}
