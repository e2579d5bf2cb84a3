//! Tests for loading theme tables from TOML files.

use std::fs;
use tempfile::TempDir;

use themed_tictactoe::{
    EngineConfig, EngineErrorKind, FixedFirstMover, GameEngine, Role, ThemeTable,
};

const THEMES: &str = r##"
[[themes]]
name = "Cats and dogs"
symbol_x = "🐱"
symbol_o = "🐶"
accent = "#fde2e4"

[[themes]]
symbol_x = "☀️"
symbol_o = "🌙"
accent = "midnightblue"
"##;

fn write_themes(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("themes.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_load_and_play_with_file_themes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_themes(&dir, THEMES);

    let themes = ThemeTable::from_file(&path).expect("Load failed");
    assert_eq!(themes.len(), 2);

    let config = EngineConfig::new().with_themes(themes).with_theme_index(1);
    let mut engine =
        GameEngine::with_config(config, FixedFirstMover(Role::O)).expect("theme 1 exists");
    engine.play_move(4);

    assert_eq!(engine.board().get(4).and_then(|c| c.symbol()), Some("🌙"));
    assert_eq!(engine.view().themes[0].label, "Cats and dogs");
    assert_eq!(engine.view().status_text(), "Next player: ☀️");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ThemeTable::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_empty_symbol_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_themes(
        &dir,
        "[[themes]]\nsymbol_x = \"\"\nsymbol_o = \"O\"\naccent = \"red\"\n",
    );
    let err = ThemeTable::from_file(&path).unwrap_err();
    assert!(err.message.contains("empty symbol"));
}

#[test]
fn test_config_with_unknown_theme_index_fails() {
    let config = EngineConfig::new().with_theme_index(5);
    let err = GameEngine::with_config(config, FixedFirstMover(Role::X)).unwrap_err();
    assert_eq!(
        err.kind(),
        &EngineErrorKind::InvalidTheme {
            index: 5,
            available: 3
        }
    );
}
