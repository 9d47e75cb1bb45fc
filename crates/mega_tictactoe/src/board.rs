//! The nested 3x3x3x3 board.

use crate::action::Move;
use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, ForcedBoard, Player, SubBoardOutcome};
use tracing::{debug, info, instrument};

/// Nine sub-boards of nine cells each, plus the outcome of every sub-board.
///
/// Cells are indexed `[outer][inner]` by [`Position::index`]. The outcome of
/// a sub-board always agrees with its cells: `Won(p)` iff `p` owns a line,
/// `Drawn` iff it is full without a line, `Undecided` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; 9]; 9],
    outcomes: [SubBoardOutcome; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from cells and matching outcomes.
    ///
    /// Callers are responsible for the outcomes agreeing with the cells.
    pub(crate) fn from_parts(cells: [[Cell; 9]; 9], outcomes: [SubBoardOutcome; 9]) -> Self {
        Self { cells, outcomes }
    }

    /// Places `player`'s mark using raw coordinates.
    ///
    /// Bounds are checked before anything else is read.
    ///
    /// # Errors
    ///
    /// See [`Board::place_move`]; additionally [`MoveError::OutOfBounds`].
    pub fn place(
        &mut self,
        player: Player,
        outer_x: usize,
        outer_y: usize,
        inner_x: usize,
        inner_y: usize,
    ) -> Result<SubBoardOutcome, MoveError> {
        let mv = Move::from_coords(outer_x, outer_y, inner_x, inner_y)?;
        self.place_move(player, mv)
    }

    /// Places `player`'s mark and returns the resulting sub-board outcome.
    ///
    /// On success exactly one cell changes and at most one sub-board outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SubBoardClaimed`] if the sub-board is won or drawn.
    /// - [`MoveError::CellOccupied`] if the cell is not empty.
    #[instrument(skip(self))]
    pub fn place_move(&mut self, player: Player, mv: Move) -> Result<SubBoardOutcome, MoveError> {
        let Move { outer, inner } = mv;

        if self.outcomes[outer.index()].is_claimed() {
            return Err(MoveError::SubBoardClaimed(outer));
        }
        if self.cells[outer.index()][inner.index()] != Cell::Empty {
            return Err(MoveError::CellOccupied { outer, inner });
        }

        let sub = &mut self.cells[outer.index()];
        sub[inner.index()] = Cell::Owner(player);
        let outcome = rules::classify_after_move(sub, player);
        self.outcomes[outer.index()] = outcome;

        if outcome.is_claimed() {
            info!(sub_board = %outer, ?outcome, "Sub-board claimed");
        } else {
            debug!(%mv, ?player, "Mark placed");
        }

        Ok(outcome)
    }

    /// Same as [`Board::place`], reporting only whether the mark was placed.
    pub fn try_place(
        &mut self,
        player: Player,
        outer_x: usize,
        outer_y: usize,
        inner_x: usize,
        inner_y: usize,
    ) -> bool {
        self.place(player, outer_x, outer_y, inner_x, inner_y).is_ok()
    }

    /// Returns the cell addressed by `mv`.
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.outer.index()][mv.inner.index()]
    }

    /// Returns the nine cells of one sub-board in row-major order.
    pub fn sub_board(&self, outer: Position) -> &[Cell; 9] {
        &self.cells[outer.index()]
    }

    /// Outcome of the sub-board at `outer`.
    pub fn sub_board_outcome(&self, outer: Position) -> SubBoardOutcome {
        self.outcomes[outer.index()]
    }

    /// True if the sub-board at `outer` still accepts moves.
    pub fn sub_board_is_playable(&self, outer: Position) -> bool {
        self.sub_board_outcome(outer) == SubBoardOutcome::Undecided
    }

    /// True if `player` has won three sub-boards in a line.
    ///
    /// Drawn sub-boards belong to nobody.
    pub fn overall_winner(&self, player: Player) -> bool {
        rules::has_line(|pos| self.outcomes[pos.index()] == SubBoardOutcome::Won(player))
    }

    /// True if every sub-board is won or drawn.
    pub fn is_full(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.is_claimed())
    }

    /// Number of owned cells across the whole board.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Lazily enumerates every move legal under `forced`.
    ///
    /// Order is row-major by outer position, then by inner position. Claimed
    /// sub-boards are skipped even when forced, so a forced claimed board
    /// yields nothing. Call again to restart.
    pub fn legal_moves(&self, forced: ForcedBoard) -> impl Iterator<Item = Move> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&outer| forced.permits(outer) && self.sub_board_is_playable(outer))
            .flat_map(move |outer| {
                Position::ALL
                    .into_iter()
                    .filter(move |&inner| self.cells[outer.index()][inner.index()] == Cell::Empty)
                    .map(move |inner| Move::new(outer, inner))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(ox: usize, oy: usize, ix: usize, iy: usize) -> Move {
        Move::from_coords(ox, oy, ix, iy).unwrap()
    }

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(Position::ALL.iter().all(|&p| board.sub_board_is_playable(p)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_sets_cell() {
        let mut board = Board::new();
        let outcome = board.place(Player::Player1, 0, 0, 0, 0).unwrap();
        assert_eq!(outcome, SubBoardOutcome::Undecided);
        assert_eq!(board.cell(mv(0, 0, 0, 0)), Cell::Owner(Player::Player1));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_leaves_board_untouched() {
        let mut board = Board::new();
        assert!(!board.try_place(Player::Player1, 0, 0, 3, 0));
        assert!(matches!(
            board.place(Player::Player1, 5, 0, 0, 0),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = Board::new();
        assert!(board.try_place(Player::Player1, 1, 1, 1, 1));
        assert_eq!(
            board.place(Player::Player2, 1, 1, 1, 1),
            Err(MoveError::CellOccupied {
                outer: Position::Center,
                inner: Position::Center
            })
        );
        assert_eq!(board.cell(mv(1, 1, 1, 1)), Cell::Owner(Player::Player1));
    }

    #[test]
    fn test_column_wins_sub_board() {
        let mut board = Board::new();
        board.place(Player::Player2, 2, 2, 1, 0).unwrap();
        board.place(Player::Player2, 2, 2, 1, 1).unwrap();
        let outcome = board.place(Player::Player2, 2, 2, 1, 2).unwrap();
        assert_eq!(outcome, SubBoardOutcome::Won(Player::Player2));
        assert!(!board.sub_board_is_playable(Position::BottomRight));
        assert_eq!(
            board.place(Player::Player1, 2, 2, 0, 0),
            Err(MoveError::SubBoardClaimed(Position::BottomRight))
        );
    }

    #[test]
    fn test_overall_winner_ignores_draws_and_opponent() {
        let mut board = Board::new();
        for ox in 0..2 {
            for ix in 0..3 {
                board.place(Player::Player1, ox, 0, ix, 0).unwrap();
            }
        }
        assert!(!board.overall_winner(Player::Player1));
        for ix in 0..3 {
            board.place(Player::Player2, 2, 0, ix, 0).unwrap();
        }
        assert!(!board.overall_winner(Player::Player1));
        assert!(!board.overall_winner(Player::Player2));
    }

    #[test]
    fn test_legal_moves_forced() {
        let mut board = Board::new();
        board.place(Player::Player1, 1, 1, 0, 0).unwrap();
        let moves: Vec<_> = board.legal_moves(ForcedBoard::At(Position::Center)).collect();
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.outer == Position::Center));
        assert!(!moves.contains(&mv(1, 1, 0, 0)));
    }

    #[test]
    fn test_legal_moves_anywhere_skips_claimed() {
        let mut board = Board::new();
        for ix in 0..3 {
            board.place(Player::Player1, 0, 0, ix, 0).unwrap();
        }
        let moves: Vec<_> = board.legal_moves(ForcedBoard::Anywhere).collect();
        assert_eq!(moves.len(), 72);
        assert!(moves.iter().all(|m| m.outer != Position::TopLeft));
        assert_eq!(
            board.legal_moves(ForcedBoard::At(Position::TopLeft)).count(),
            0
        );
    }

    #[test]
    fn test_legal_moves_order_is_row_major() {
        let board = Board::new();
        let first: Vec<_> = board.legal_moves(ForcedBoard::Anywhere).take(4).collect();
        assert_eq!(
            first,
            vec![mv(0, 0, 0, 0), mv(0, 0, 1, 0), mv(0, 0, 2, 0), mv(0, 0, 0, 1)]
        );
        assert_eq!(board.legal_moves(ForcedBoard::Anywhere).count(), 81);
    }
}
