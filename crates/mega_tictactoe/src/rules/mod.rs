//! Line and draw rules shared by both board levels.
//!
//! A sub-board is a 3x3 grid of cells and the outer board is a 3x3 grid of
//! sub-board outcomes. Both are checked through an ownership predicate over
//! [`Position`], so a single line check serves both scales.

pub mod draw;
pub mod win;

pub use draw::is_filled;
pub use win::has_line;

use crate::position::Position;
use crate::types::{Cell, Player, SubBoardOutcome};

/// Classifies a sub-board right after `mover` placed into it.
///
/// A completed line takes priority over a full grid, so a ninth-cell move
/// that also finishes a line is a win.
pub fn classify_after_move(cells: &[Cell; 9], mover: Player) -> SubBoardOutcome {
    if has_line(|pos: Position| cells[pos.index()].is_owned_by(mover)) {
        SubBoardOutcome::Won(mover)
    } else if is_filled(|pos: Position| cells[pos.index()] != Cell::Empty) {
        SubBoardOutcome::Drawn
    } else {
        SubBoardOutcome::Undecided
    }
}

/// Classifies a sub-board from its cells alone.
///
/// Returns `None` when both players own a line, which no legal sequence of
/// moves can produce.
pub fn classify(cells: &[Cell; 9]) -> Option<SubBoardOutcome> {
    let p1 = has_line(|pos: Position| cells[pos.index()].is_owned_by(Player::Player1));
    let p2 = has_line(|pos: Position| cells[pos.index()].is_owned_by(Player::Player2));
    match (p1, p2) {
        (true, true) => None,
        (true, false) => Some(SubBoardOutcome::Won(Player::Player1)),
        (false, true) => Some(SubBoardOutcome::Won(Player::Player2)),
        (false, false) if is_filled(|pos: Position| cells[pos.index()] != Cell::Empty) => {
            Some(SubBoardOutcome::Drawn)
        }
        (false, false) => Some(SubBoardOutcome::Undecided),
    }
}
