//! Terminal front-end for themed tic-tac-toe.
//!
//! The binary parses [`cli::Cli`] and hands stdin/stdout to
//! [`frontend::run`]; everything here is a consumer of the engine's
//! public API and [`GameView`](themed_tictactoe::GameView).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod frontend;

pub use cli::{Cli, Command};
pub use frontend::{render, render_themes, run};
