//! Game mode selection.

use mega_tictactoe::Player;

/// Game mode - who is the opponent?
///
/// The numeric code is what save files store under `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Opponent {
    /// Hot-seat: a second human at the same console.
    Human,
    /// Bot picking uniformly among legal moves.
    #[default]
    Random,
    /// Bot picking the first legal move.
    First,
}

impl Opponent {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Opponent::Human => "Hot-seat",
            Opponent::Random => "Random bot",
            Opponent::First => "First-move bot",
        }
    }

    /// Code written to save files.
    pub fn code(self) -> u8 {
        match self {
            Opponent::Human => 1,
            Opponent::Random => 2,
            Opponent::First => 3,
        }
    }

    /// Opponent for a saved `mode` code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Opponent::Human),
            2 => Some(Opponent::Random),
            3 => Some(Opponent::First),
            _ => None,
        }
    }
}

/// Which side the local human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Side {
    /// First mover (Player 1).
    #[default]
    O,
    /// Second mover (Player 2).
    X,
}

impl Side {
    /// Player id for this side.
    pub fn player(self) -> Player {
        match self {
            Side::O => Player::Player1,
            Side::X => Player::Player2,
        }
    }
}
