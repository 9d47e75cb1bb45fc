//! Tests for loading host configuration files.

use mega_games::GameConfig;
use mega_tictactoe::Player;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().expect("Temp dir");
    let path = dir.path().join("mega_games.toml");
    std::fs::write(
        &path,
        r#"
saves_dir = "my_saves"
autosave_every = 3
autosave_name = "quick"
player1_symbol = "A"
player2_symbol = "B"
"#,
    )
    .unwrap();

    let config = GameConfig::load(&path).expect("Config loads");
    assert_eq!(config.saves_dir(), &PathBuf::from("my_saves"));
    assert_eq!(*config.autosave_every(), 3);
    assert_eq!(config.autosave_name(), "quick");
    assert_eq!(config.symbol(Player::Player1), 'A');
    assert_eq!(config.symbol(Player::Player2), 'B');
}

#[test]
fn test_same_symbols_rejected() {
    let dir = TempDir::new().expect("Temp dir");
    let path = dir.path().join("mega_games.toml");
    std::fs::write(&path, "player1_symbol = \"X\"\n").unwrap();

    let err = GameConfig::load(&path).unwrap_err();
    assert!(err.message.contains("Both players use the symbol 'X'"));
}

#[test]
fn test_unparseable_file_rejected() {
    let dir = TempDir::new().expect("Temp dir");
    let path = dir.path().join("mega_games.toml");
    std::fs::write(&path, "autosave_every = \"often\"\n").unwrap();

    let err = GameConfig::load(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
