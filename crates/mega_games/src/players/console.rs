//! Human player typing coordinates at a console.

use mega_tictactoe::{Board, Cell, ForcedBoard, Move, MoveSource, Position};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use tracing::{debug, warn};

/// Human player reading 1-based coordinates line by line.
///
/// Typing anything starting with `q` (or closing the input) quits.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    /// Creates a player on standard input and output.
    pub fn stdio(name: impl Into<String>) -> Self {
        // No read-ahead: hot-seat players share stdin.
        Self::new(
            name,
            BufReader::with_capacity(1, std::io::stdin()),
            std::io::stdout(),
        )
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a player on the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, message: impl std::fmt::Display) {
        if let Err(e) = write!(self.output, "{}", message).and_then(|_| self.output.flush()) {
            warn!(error = %e, "Failed to write prompt");
        }
    }

    /// Reads one coordinate in `1..=3`, returned 0-based. `None` means quit.
    fn ask_coord(&mut self, prompt: &str) -> Option<usize> {
        loop {
            self.say(prompt);
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    return None;
                }
            }

            let entered = line.trim();
            if entered.to_lowercase().starts_with('q') {
                debug!(player = %self.name, "Player quit");
                return None;
            }
            match entered.parse::<usize>() {
                Ok(n @ 1..=3) => return Some(n - 1),
                _ => self.say("Invalid input! (1 - 3)\n"),
            }
        }
    }

    fn ask_position(&mut self, kind: &str) -> Option<Position> {
        let x = self.ask_coord(&format!("Enter {} X: ", kind))?;
        let y = self.ask_coord(&format!("Enter {} Y: ", kind))?;
        Position::from_xy(x, y)
    }

    fn ask_move(&mut self, forced: ForcedBoard, board: &Board) -> Option<Move> {
        let outer = match forced {
            ForcedBoard::At(outer) => {
                self.say(format!(
                    "You must play in the ({}, {}) board!\n",
                    outer.x() + 1,
                    outer.y() + 1
                ));
                outer
            }
            ForcedBoard::Anywhere => {
                self.say("You can play anywhere!\n");
                loop {
                    let outer = self.ask_position("big")?;
                    if board.sub_board_is_playable(outer) {
                        break outer;
                    }
                    self.say(format!(
                        "Big board ({}, {}) is already taken!\n",
                        outer.x() + 1,
                        outer.y() + 1
                    ));
                }
            }
        };

        let inner = self.ask_position("small")?;
        Some(Move::new(outer, inner))
    }
}

impl<R: BufRead + Send, W: Write + Send> MoveSource for ConsolePlayer<R, W> {
    fn get_move(&mut self, forced: ForcedBoard, board: &Board) -> Option<Move> {
        loop {
            let mv = self.ask_move(forced, board)?;
            if board.cell(mv) == Cell::Empty {
                return Some(mv);
            }
            self.say("Invalid move!\n");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mega_tictactoe::Player;
    use std::io::Cursor;

    fn player(input: &str) -> ConsolePlayer<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePlayer::new("human", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_anywhere_move() {
        let mut human = player("2\n3\n1\n2\n");
        let mv = human.get_move(ForcedBoard::Anywhere, &Board::new()).unwrap();
        assert_eq!(mv, Move::new(Position::BottomCenter, Position::MiddleLeft));
    }

    #[test]
    fn test_forced_move_asks_only_small() {
        let mut human = player("3\n3\n");
        let mv = human
            .get_move(ForcedBoard::At(Position::TopRight), &Board::new())
            .unwrap();
        assert_eq!(mv, Move::new(Position::TopRight, Position::BottomRight));
        let output = String::from_utf8(human.into_output()).unwrap();
        assert!(output.contains("You must play in the (3, 1) board!"));
    }

    #[test]
    fn test_reprompts_on_bad_input_and_occupied_cell() {
        let mut board = Board::new();
        board.place(Player::Player2, 0, 0, 0, 0).unwrap();
        let mut human = player("abc\n7\n1\n1\n2\n2\n");
        let mv = human.get_move(ForcedBoard::At(Position::TopLeft), &board).unwrap();
        assert_eq!(mv, Move::new(Position::TopLeft, Position::Center));
        let output = String::from_utf8(human.into_output()).unwrap();
        assert!(output.contains("Invalid input! (1 - 3)"));
        assert!(output.contains("Invalid move!"));
    }

    #[test]
    fn test_claimed_big_board_is_refused() {
        let mut board = Board::new();
        for ix in 0..3 {
            board.place(Player::Player1, 0, 0, ix, 0).unwrap();
        }
        let mut human = player("1\n1\n2\n1\n1\n1\n");
        let mv = human.get_move(ForcedBoard::Anywhere, &board).unwrap();
        assert_eq!(mv, Move::new(Position::TopCenter, Position::TopLeft));
        let output = String::from_utf8(human.into_output()).unwrap();
        assert!(output.contains("Big board (1, 1) is already taken!"));
    }

    #[test]
    fn test_quit_and_eof() {
        let mut human = player("q\n");
        assert_eq!(human.get_move(ForcedBoard::Anywhere, &Board::new()), None);
        let mut human = player("1\n");
        assert_eq!(human.get_move(ForcedBoard::Anywhere, &Board::new()), None);
    }
}
