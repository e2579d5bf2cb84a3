//! Themed tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use themed_tictactoe::{EngineConfig, GameEngine, RandomFirstMover, ThemeTable};
use themed_tictactoe_cli::{Cli, Command, frontend};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    match cli.command {
        Command::Play {
            themes,
            theme,
            seed,
            json,
        } => run_play(themes.as_deref(), theme, seed, json),
        Command::Themes { themes } => run_themes(themes.as_deref()),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[instrument]
fn load_themes(path: Option<&Path>) -> Result<ThemeTable> {
    match path {
        Some(path) => ThemeTable::from_file(path)
            .with_context(|| format!("Failed to load themes from {}", path.display())),
        None => Ok(ThemeTable::default()),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument]
fn run_play(themes: Option<&Path>, theme: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let themes = load_themes(themes)?;
    let index = theme.checked_sub(1).context("Themes are numbered from 1")?;
    let config = EngineConfig::new()
        .with_themes(themes)
        .with_theme_index(index);

    let first_mover = match seed {
        Some(seed) => RandomFirstMover::seeded(seed),
        None => RandomFirstMover::from_entropy(),
    };

    let mut engine = GameEngine::with_config(config, first_mover)
        .with_context(|| format!("Theme {} is not available", theme))?;

    info!("Starting game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    frontend::run(&mut engine, stdin.lock(), stdout.lock(), json)
}

/// Print the theme table
#[instrument]
fn run_themes(themes: Option<&Path>) -> Result<()> {
    let themes = load_themes(themes)?;
    for (i, theme) in themes.iter().enumerate() {
        println!("{}. {} ({})", i + 1, theme.label(), theme.accent());
    }
    Ok(())
}
