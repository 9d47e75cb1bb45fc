//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold between moves. They are
//! asserted after every accepted move in debug builds and checked on every
//! snapshot load.

pub mod forced_board_playable;
pub mod outcomes_match_cells;
pub mod turn_count_matches;

pub use forced_board_playable::ForcedBoardPlayableInvariant;
pub use outcomes_match_cells::OutcomesMatchCellsInvariant;
pub use turn_count_matches::TurnCountMatchesInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    OutcomesMatchCellsInvariant,
    ForcedBoardPlayableInvariant,
    TurnCountMatchesInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameSession;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = GameSession::new();
        session.accept_move(1, 1, 0, 0).unwrap();
        session.accept_move(0, 0, 1, 1).unwrap();
        session.accept_move(1, 1, 2, 2).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        let mut session = GameSession::new();
        session.turn_count = 4;
        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, TurnCountMatchesInvariant::description());
    }
}
