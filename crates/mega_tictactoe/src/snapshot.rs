//! Plain serializable snapshot of a session.
//!
//! Field names and integer codes match the save files written by earlier
//! releases: `board` is `[outer_y][outer_x][inner_y][inner_x]` with
//! 0 = empty, 1 = player 1, 2 = player 2; `big_board` is `[outer_y][outer_x]`
//! with -1 marking a drawn sub-board; `next` is `[-1, -1]` for anywhere.

use crate::board::Board;
use crate::error::SnapshotError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::position::Position;
use crate::rules;
use crate::session::GameSession;
use crate::types::{Cell, ForcedBoard, Player, SubBoardOutcome};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

const EMPTY: i8 = 0;
const DRAWN: i8 = -1;
const ANYWHERE: i8 = -1;

/// Persisted form of a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cell owners, `[outer_y][outer_x][inner_y][inner_x]`.
    pub board: Vec<Vec<Vec<Vec<i8>>>>,
    /// Sub-board outcomes, `[outer_y][outer_x]`.
    pub big_board: Vec<Vec<i8>>,
    /// Player to move (1 or 2).
    pub current_player: i8,
    /// Forced sub-board as `(x, y)`, or `(-1, -1)`.
    pub next: (i8, i8),
    /// Host-defined opponent category.
    pub mode: u8,
    /// Opponent agent name. Always written, empty when unused, since older
    /// readers require the key.
    #[serde(default)]
    pub agent_name: String,
    /// Accepted moves so far; derived from the board when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,
}

fn encode_cell(cell: Cell) -> i8 {
    match cell {
        Cell::Empty => EMPTY,
        Cell::Owner(player) => player.number(),
    }
}

fn decode_cell(value: i8) -> Result<Cell, SnapshotError> {
    match value {
        EMPTY => Ok(Cell::Empty),
        n => Player::from_number(n)
            .map(Cell::Owner)
            .ok_or_else(|| SnapshotError::new(format!("invalid cell value {}", n))),
    }
}

fn encode_outcome(outcome: SubBoardOutcome) -> i8 {
    match outcome {
        SubBoardOutcome::Undecided => EMPTY,
        SubBoardOutcome::Won(player) => player.number(),
        SubBoardOutcome::Drawn => DRAWN,
    }
}

fn decode_outcome(value: i8) -> Result<SubBoardOutcome, SnapshotError> {
    match value {
        EMPTY => Ok(SubBoardOutcome::Undecided),
        DRAWN => Ok(SubBoardOutcome::Drawn),
        n => Player::from_number(n)
            .map(SubBoardOutcome::Won)
            .ok_or_else(|| SnapshotError::new(format!("invalid sub-board outcome {}", n))),
    }
}

fn decode_next((x, y): (i8, i8)) -> Result<ForcedBoard, SnapshotError> {
    if (x, y) == (ANYWHERE, ANYWHERE) {
        return Ok(ForcedBoard::Anywhere);
    }
    usize::try_from(x)
        .ok()
        .zip(usize::try_from(y).ok())
        .and_then(|(x, y)| Position::from_xy(x, y))
        .map(ForcedBoard::At)
        .ok_or_else(|| SnapshotError::new(format!("inconsistent next pair ({}, {})", x, y)))
}

#[track_caller]
fn expect_3<T>(items: &[T], what: &str) -> Result<(), SnapshotError> {
    if items.len() == 3 {
        Ok(())
    } else {
        Err(SnapshotError::new(format!(
            "{} has length {}, expected 3",
            what,
            items.len()
        )))
    }
}

fn check_shape(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    expect_3(&snapshot.board, "board")?;
    for row in &snapshot.board {
        expect_3(row, "board row")?;
        for sub in row {
            expect_3(sub, "sub-board")?;
            for sub_row in sub {
                expect_3(sub_row, "sub-board row")?;
            }
        }
    }
    expect_3(&snapshot.big_board, "big_board")?;
    for row in &snapshot.big_board {
        expect_3(row, "big_board row")?;
    }
    Ok(())
}

impl GameSession {
    /// Takes a snapshot of the session.
    #[instrument(skip(self))]
    pub fn to_snapshot(&self) -> Snapshot {
        let board = (0..3)
            .map(|oy| {
                (0..3)
                    .map(|ox| {
                        let sub = self.board.sub_board(Position::ALL[oy * 3 + ox]);
                        (0..3)
                            .map(|iy| {
                                (0..3)
                                    .map(|ix| encode_cell(sub[iy * 3 + ix]))
                                    .collect::<Vec<_>>()
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let big_board = (0..3)
            .map(|oy| {
                (0..3)
                    .map(|ox| {
                        encode_outcome(self.board.sub_board_outcome(Position::ALL[oy * 3 + ox]))
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let next = match self.forced {
            ForcedBoard::Anywhere => (ANYWHERE, ANYWHERE),
            ForcedBoard::At(pos) => (pos.x() as i8, pos.y() as i8),
        };

        Snapshot {
            board,
            big_board,
            current_player: self.current_player.number(),
            next,
            mode: self.mode,
            agent_name: String::new(),
            turns: Some(self.turn_count),
        }
    }

    /// Rebuilds a session from a snapshot.
    ///
    /// Sub-board outcomes are recomputed from the cells and must agree with
    /// `big_board`; the winner is recomputed from the outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] on wrong array shapes, out-of-range values,
    /// an inconsistent `next` pair, outcomes that disagree with the cells, or
    /// a turn count that disagrees with the board.
    #[instrument(skip(snapshot), fields(mode = snapshot.mode))]
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        check_shape(snapshot).inspect_err(|e| warn!(error = %e, "Rejected snapshot shape"))?;

        let mut cells = [[Cell::Empty; 9]; 9];
        let mut outcomes = [SubBoardOutcome::Undecided; 9];
        for outer in Position::ALL {
            let sub = &snapshot.board[outer.y()][outer.x()];
            for inner in Position::ALL {
                cells[outer.index()][inner.index()] = decode_cell(sub[inner.y()][inner.x()])?;
            }

            let recorded = decode_outcome(snapshot.big_board[outer.y()][outer.x()])?;
            let derived = rules::classify(&cells[outer.index()]).ok_or_else(|| {
                SnapshotError::new(format!("sub-board {} has lines for both players", outer))
            })?;
            if recorded != derived {
                return Err(SnapshotError::new(format!(
                    "sub-board {} recorded as {:?} but its cells say {:?}",
                    outer, recorded, derived
                )));
            }
            outcomes[outer.index()] = derived;
        }
        let board = Board::from_parts(cells, outcomes);

        let current_player = Player::from_number(snapshot.current_player).ok_or_else(|| {
            SnapshotError::new(format!("invalid current player {}", snapshot.current_player))
        })?;
        let forced = decode_next(snapshot.next)?;

        let occupied = board.occupied_count() as u32;
        let turn_count = match snapshot.turns {
            Some(turns) if turns != occupied => {
                return Err(SnapshotError::new(format!(
                    "turn count {} but {} cells are owned",
                    turns, occupied
                )));
            }
            _ => occupied,
        };

        let winners: Vec<Player> = Player::iter().filter(|&p| board.overall_winner(p)).collect();
        let winner = match winners.as_slice() {
            [] => None,
            [player] => Some(*player),
            _ => return Err(SnapshotError::new("both players own a line of sub-boards")),
        };

        let session = GameSession {
            board,
            current_player,
            forced,
            winner,
            turn_count,
            test_mode: false,
            mode: snapshot.mode,
            last_move: None,
        };

        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SnapshotError::new(descriptions)
        })?;

        info!(
            turns = session.turn_count,
            status = ?session.status(),
            "Session restored from snapshot"
        );
        Ok(session)
    }
}

impl TryFrom<&Snapshot> for GameSession {
    type Error = SnapshotError;

    fn try_from(snapshot: &Snapshot) -> Result<Self, Self::Error> {
        GameSession::from_snapshot(snapshot)
    }
}
