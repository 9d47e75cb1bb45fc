//! Game loop between two move sources.

use crate::config::GameConfig;
use crate::render::render;
use anyhow::Result;
use mega_tictactoe::{Cell, GameSession, GameStatus, MoveSource, Player, SaveSink, Snapshot};
use std::io::Write;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// How a game loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a terminal status.
    Finished(GameStatus),
    /// A player quit; the snapshot holds the position at that point.
    Quit(Snapshot),
}

/// Drives a [`GameSession`] by polling each player's [`MoveSource`] in turn.
pub struct Orchestrator<W> {
    session: GameSession,
    player1: Box<dyn MoveSource>,
    player2: Box<dyn MoveSource>,
    sink: Arc<dyn SaveSink>,
    config: GameConfig,
    autosave: bool,
    output: W,
    pending: Option<JoinHandle<()>>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for an existing session.
    pub fn new(
        session: GameSession,
        player1: Box<dyn MoveSource>,
        player2: Box<dyn MoveSource>,
        sink: Arc<dyn SaveSink>,
        config: GameConfig,
        output: W,
    ) -> Self {
        Self {
            session,
            player1,
            player2,
            sink,
            config,
            autosave: true,
            output,
            pending: None,
        }
    }

    /// Turns periodic autosave on or off.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the orchestrator, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the game ends or a player quits.
    ///
    /// Rejected moves are reported and the same player is asked again.
    /// Autosaves run off the game loop, one at a time, and the last one is
    /// awaited before returning.
    ///
    /// # Errors
    ///
    /// Fails if the output stream cannot be written.
    #[instrument(skip(self), fields(mode = self.session.mode()))]
    pub async fn run(&mut self) -> Result<GameEnd> {
        info!(
            player1 = self.player1.name(),
            player2 = self.player2.name(),
            "Starting game"
        );

        let end = loop {
            if self.session.is_over() {
                break GameEnd::Finished(self.session.status());
            }

            let player = self.session.current_player();
            let symbol = self.config.symbol(player);
            write!(
                self.output,
                "{}",
                render(
                    self.session.board(),
                    self.session.forced_sub_board(),
                    &self.config
                )
            )?;
            writeln!(self.output, "{}'s turn!", symbol)?;
            if let Some(last) = self.session.last_move()
                && let Cell::Owner(mover) = self.session.board().cell(last)
            {
                writeln!(self.output, "{} played {}", self.config.symbol(mover), last)?;
            }

            let source = match player {
                Player::Player1 => &mut self.player1,
                Player::Player2 => &mut self.player2,
            };
            debug!(player = source.name(), "Waiting for move");

            let Some(mv) = source.get_move(
                self.session.forced_sub_board(),
                self.session.board(),
            ) else {
                info!(player = source.name(), "Player quit");
                break GameEnd::Quit(self.session.to_snapshot());
            };

            if let Err(e) = self.session.accept(mv) {
                debug!(%mv, error = %e, "Move rejected");
                writeln!(self.output, "Invalid move! Try again.")?;
                continue;
            }

            self.maybe_autosave().await;
        };

        if let GameEnd::Finished(status) = &end {
            write!(
                self.output,
                "{}",
                render(
                    self.session.board(),
                    self.session.forced_sub_board(),
                    &self.config
                )
            )?;
            match status {
                GameStatus::Won(winner) => {
                    writeln!(self.output, "{} wins the game!", self.config.symbol(*winner))?
                }
                _ => writeln!(self.output, "It's a tie!")?,
            }
            info!(?status, turns = self.session.turn_count(), "Game finished");
        }

        self.flush_saves().await;
        Ok(end)
    }

    async fn maybe_autosave(&mut self) {
        let every = *self.config.autosave_every();
        if !self.autosave || every == 0 || self.session.turn_count() % every != 0 {
            return;
        }

        // Saves share a file name, so never write two at once.
        self.flush_saves().await;

        let snapshot = self.session.to_snapshot();
        let sink = Arc::clone(&self.sink);
        let name = self.config.autosave_name().clone();
        debug!(turn = self.session.turn_count(), %name, "Autosaving");
        self.pending = Some(tokio::task::spawn_blocking(move || {
            if let Err(e) = sink.save(&name, &snapshot) {
                warn!(error = %e, "Autosave failed");
            }
        }));
    }

    async fn flush_saves(&mut self) {
        if let Some(handle) = self.pending.take()
            && let Err(e) = handle.await
        {
            warn!(error = %e, "Autosave task did not complete");
        }
    }
}
