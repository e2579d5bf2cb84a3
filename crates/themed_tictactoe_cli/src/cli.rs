//! Command-line interface for themed_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Themed tic-tac-toe with replayable history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug" or "themed_tictactoe=info"
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// TOML file with a `[[themes]]` table (built-in themes if omitted)
        #[arg(long)]
        themes: Option<PathBuf>,

        /// Theme to start with (1-based, as listed by `themes`)
        #[arg(long, default_value = "1")]
        theme: usize,

        /// Seed for the first-mover coin flip
        #[arg(long)]
        seed: Option<u64>,

        /// Print the game view as JSON instead of a drawn board
        #[arg(long)]
        json: bool,
    },

    /// List available themes
    Themes {
        /// TOML file with a `[[themes]]` table (built-in themes if omitted)
        #[arg(long)]
        themes: Option<PathBuf>,
    },
}
