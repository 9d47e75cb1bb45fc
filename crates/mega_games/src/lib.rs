//! Mega Tic-Tac-Toe - console host
//!
//! Wires the `mega_tictactoe` engine to people and bots:
//!
//! - **players**: console input, a random bot and a first-move bot, all
//!   [`MoveSource`](mega_tictactoe::MoveSource)s.
//! - **orchestrator**: the async game loop with periodic autosave.
//! - **save**: JSON save files under a configurable directory.
//! - **config** / **cli**: TOML settings and command-line parsing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod mode;
pub mod orchestrator;
pub mod players;
pub mod render;
pub mod save;

pub use config::{ConfigError, GameConfig};
pub use mode::{Opponent, Side};
pub use orchestrator::{GameEnd, Orchestrator};
pub use save::JsonSaveSink;
