//! Command-line interface for mega_games.

use crate::mode::{Opponent, Side};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mega Tic-Tac-Toe - nine boards, one game
#[derive(Parser, Debug)]
#[command(name = "mega_games")]
#[command(about = "Play mega tic-tac-toe at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "mega_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game
    Play {
        /// Who plays against you
        #[arg(short, long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,

        /// Which side you play (O moves first)
        #[arg(long, value_enum, default_value_t = Side::O)]
        play_as: Side,

        /// Ignore forced sub-boards and keep the same player every turn
        #[arg(long)]
        test_mode: bool,

        /// Seed for the random bot
        #[arg(long)]
        seed: Option<u64>,

        /// Disable periodic autosave
        #[arg(long)]
        no_autosave: bool,
    },

    /// Resume a saved game
    Load {
        /// Save name (with or without .json)
        name: String,

        /// Seed for the random bot
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List saved games
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["mega_games", "play"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("mega_games.toml"));
        match cli.command {
            Command::Play {
                opponent,
                play_as,
                test_mode,
                seed,
                no_autosave,
            } => {
                assert_eq!(opponent, Opponent::Random);
                assert_eq!(play_as, Side::O);
                assert!(!test_mode);
                assert_eq!(seed, None);
                assert!(!no_autosave);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "mega_games",
            "play",
            "--opponent",
            "human",
            "--play-as",
            "x",
            "--seed",
            "9",
            "--test-mode",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Play {
                opponent: Opponent::Human,
                play_as: Side::X,
                test_mode: true,
                seed: Some(9),
                ..
            }
        ));
    }

    #[test]
    fn test_load_and_list() {
        let cli = Cli::try_parse_from(["mega_games", "--config", "a.toml", "load", "game1"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("a.toml"));
        assert!(matches!(cli.command, Command::Load { ref name, .. } if name == "game1"));

        let cli = Cli::try_parse_from(["mega_games", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }
}
