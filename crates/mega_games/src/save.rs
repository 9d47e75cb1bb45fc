//! JSON save files.

use anyhow::{Context, Result};
use mega_tictactoe::{GameSession, SaveError, SaveSink, Snapshot, SnapshotError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Stores snapshots as `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct JsonSaveSink {
    dir: PathBuf,
}

impl JsonSaveSink {
    /// Creates a sink writing into `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the save files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the save file for `name`, appending `.json` when missing.
    pub fn path_for(&self, name: &str) -> PathBuf {
        if name.ends_with(".json") {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{}.json", name))
        }
    }

    /// Reads a snapshot back and rebuilds the session.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or unreadable, is not a snapshot, or
    /// describes an impossible game.
    #[instrument(skip(self))]
    pub fn load(&self, name: &str) -> Result<GameSession> {
        let path = self.path_for(name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("File {} doesn't exist or can't be read", path.display()))?;

        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| SnapshotError::new(format!("invalid JSON: {}", e)))?;
        let session = GameSession::from_snapshot(&snapshot)?;

        info!(path = %path.display(), "Game loaded");
        Ok(session)
    }

    /// Names of the saves in the directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the directory exists but cannot be listed.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<String>, SaveError> {
        if !self.dir.exists() {
            debug!(dir = %self.dir.display(), "No saves directory yet");
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Asks whether to keep a quit game and saves it under a typed name.
///
/// Empty names are asked for again. A failed save is reported and the
/// player may retry with another name. Returns the name the game was saved
/// under, or `None` if the player declined or the input closed.
///
/// # Errors
///
/// Fails only if the prompt streams fail.
#[instrument(skip_all)]
pub fn offer_save<R: BufRead, W: Write>(
    sink: &dyn SaveSink,
    snapshot: &Snapshot,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Option<String>> {
    if !ask_yes_no("Do you want to save the game? (y/n): ", input, output)? {
        return Ok(None);
    }

    loop {
        let Some(name) = ask_line("Enter the name of the file: ", input, output)? else {
            return Ok(None);
        };
        if name.is_empty() {
            writeln!(output, "Please enter a name!")?;
            continue;
        }

        match sink.save(&name, snapshot) {
            Ok(()) => return Ok(Some(name)),
            Err(e) => {
                warn!(%name, error = %e, "Save failed");
                writeln!(output, "Could not save the game: {}", e)?;
                if !ask_yes_no("Try again? (y/n): ", input, output)? {
                    return Ok(None);
                }
            }
        }
    }
}

/// `None` once the input is closed.
fn ask_line<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// A closed input counts as "no".
fn ask_yes_no<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    loop {
        match ask_line(question, input, output)?.as_deref() {
            Some("y" | "Y") => return Ok(true),
            Some("n" | "N") | None => return Ok(false),
            Some(_) => writeln!(output, "Invalid input! (y/n)")?,
        }
    }
}

impl SaveSink for JsonSaveSink {
    #[instrument(skip(self, snapshot))]
    fn save(&self, name: &str, snapshot: &Snapshot) -> Result<(), SaveError> {
        let path = self.path_for(name);
        std::fs::create_dir_all(&self.dir)?;

        let content = serde_json::to_string(snapshot)
            .map_err(|e| SaveError::new(format!("Failed to serialize snapshot: {}", e)))?;
        std::fs::write(&path, content).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to write save file");
        })?;

        info!(path = %path.display(), "Game saved");
        Ok(())
    }
}
