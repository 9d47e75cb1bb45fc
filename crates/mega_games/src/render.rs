//! Text rendering of the nested board.

use crate::config::GameConfig;
use mega_tictactoe::{Board, Cell, ForcedBoard, Position, SubBoardOutcome};

const HORIZONTAL: &str = "     -----------------------\n";

/// Formats the board with 1-based axis labels.
///
/// Won sub-boards collapse into a framed winner symbol and drawn ones into a
/// framed `#`. Empty cells of sub-boards the next player may use are drawn
/// as `_`, other empty cells as `.`.
pub fn render(board: &Board, forced: ForcedBoard, config: &GameConfig) -> String {
    let mut result = String::from("        1       2       3\n");
    result.push_str("      1 2 3   1 2 3   1 2 3\n");
    result.push_str(HORIZONTAL);

    for outer_y in 0..3 {
        for inner_y in 0..3 {
            let label = if inner_y == 1 {
                char::from(b'1' + outer_y as u8)
            } else {
                ' '
            };
            result.push_str(&format!("{} {} | ", label, inner_y + 1));

            for outer in Position::ALL.iter().copied().filter(|p| p.y() == outer_y) {
                let row = match board.sub_board_outcome(outer) {
                    SubBoardOutcome::Won(player) => claimed_row(config.symbol(player), inner_y),
                    SubBoardOutcome::Drawn => claimed_row('#', inner_y),
                    SubBoardOutcome::Undecided => {
                        let open = forced.permits(outer);
                        board.sub_board(outer)[inner_y * 3..inner_y * 3 + 3]
                            .iter()
                            .map(|&cell| match cell {
                                Cell::Owner(player) => config.symbol(player),
                                Cell::Empty if open => '_',
                                Cell::Empty => '.',
                            })
                            .map(String::from)
                            .collect::<Vec<_>>()
                            .join(" ")
                    }
                };
                result.push_str(&row);
                result.push_str(" | ");
            }
            result.push('\n');
        }
        result.push_str(HORIZONTAL);
    }

    result
}

fn claimed_row(symbol: char, inner_y: usize) -> String {
    match inner_y {
        1 => format!("| {} |", symbol),
        _ => "+---+".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mega_tictactoe::Player;

    #[test]
    fn test_empty_board_shape() {
        let text = render(&Board::new(), ForcedBoard::Anywhere, &GameConfig::default());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 3 * 4);
        assert_eq!(lines[3], "  1 | _ _ _ | _ _ _ | _ _ _ | ");
        assert_eq!(lines[4], "1 2 | _ _ _ | _ _ _ | _ _ _ | ");
    }

    #[test]
    fn test_forced_board_highlights_only_that_board() {
        let text = render(
            &Board::new(),
            ForcedBoard::At(Position::TopCenter),
            &GameConfig::default(),
        );
        assert!(text.contains("  1 | . . . | _ _ _ | . . . | "));
    }

    #[test]
    fn test_marks_and_claimed_boards() {
        let mut board = Board::new();
        for ix in 0..3 {
            board.place(Player::Player2, 0, 0, ix, 1).unwrap();
        }
        board.place(Player::Player1, 1, 0, 2, 0).unwrap();
        let text = render(&board, ForcedBoard::Anywhere, &GameConfig::default());
        assert!(text.contains("  1 | +---+ | _ _ O |"));
        assert!(text.contains("1 2 | | X | |"));
    }
}
