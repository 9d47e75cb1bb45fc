//! Mega Tic-Tac-Toe - console entry point.

use anyhow::Result;
use clap::Parser;
use mega_games::cli::{Cli, Command};
use mega_games::players::{ConsolePlayer, FirstAvailablePlayer, RandomPlayer};
use mega_games::save::offer_save;
use mega_games::{GameConfig, GameEnd, JsonSaveSink, Opponent, Orchestrator, Side};
use mega_tictactoe::{GameSession, MoveSource};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout carries the board, logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(&cli.config)?;
    let sink = JsonSaveSink::new(config.saves_dir());

    match cli.command {
        Command::Play {
            opponent,
            play_as,
            test_mode,
            seed,
            no_autosave,
        } => {
            let session = GameSession::new()
                .with_test_mode(test_mode)
                .with_mode(opponent.code());
            play(session, opponent, play_as, seed, !no_autosave, sink, config).await
        }
        Command::Load { name, seed } => {
            let session = sink.load(&name)?;
            let opponent = Opponent::from_code(session.mode()).unwrap_or_else(|| {
                warn!(mode = session.mode(), "Unknown mode in save, using default opponent");
                Opponent::default()
            });
            println!("Game loaded: {} ({})", name, opponent.name());
            play(session, opponent, Side::O, seed, true, sink, config).await
        }
        Command::List => list(&sink),
    }
}

/// Builds both move sources, with the human on `side`.
fn build_players(
    opponent: Opponent,
    side: Side,
    seed: Option<u64>,
) -> (Box<dyn MoveSource>, Box<dyn MoveSource>) {
    let human: Box<dyn MoveSource> = Box::new(ConsolePlayer::stdio("Human"));
    let other: Box<dyn MoveSource> = match opponent {
        Opponent::Human => Box::new(ConsolePlayer::stdio("Human 2")),
        Opponent::Random => Box::new(RandomPlayer::new("Random bot", seed)),
        Opponent::First => Box::new(FirstAvailablePlayer::new("First-move bot")),
    };

    match side {
        Side::O => (human, other),
        Side::X => (other, human),
    }
}

/// Runs one game and offers to save it if a player quits.
#[instrument(skip(session, sink, config))]
async fn play(
    session: GameSession,
    opponent: Opponent,
    side: Side,
    seed: Option<u64>,
    autosave: bool,
    sink: JsonSaveSink,
    config: GameConfig,
) -> Result<()> {
    let (player1, player2) = build_players(opponent, side, seed);
    let sink = Arc::new(sink);
    let mut orchestrator = Orchestrator::new(
        session,
        player1,
        player2,
        sink.clone(),
        config,
        std::io::stdout(),
    )
    .with_autosave(autosave);

    match orchestrator.run().await? {
        GameEnd::Finished(status) => {
            info!(?status, "Game over");
            Ok(())
        }
        GameEnd::Quit(snapshot) => {
            let mut input = std::io::stdin().lock();
            let mut output = std::io::stdout();
            if let Some(name) = offer_save(&*sink, &snapshot, &mut input, &mut output)? {
                println!("Game saved to {}", sink.path_for(&name).display());
            }
            Ok(())
        }
    }
}

fn list(sink: &JsonSaveSink) -> Result<()> {
    let names = sink.list()?;
    if names.is_empty() {
        println!("No saved games in {}", sink.dir().display());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
