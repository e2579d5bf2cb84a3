//! Line-based front-end.
//!
//! Reads one command per line, forwards it to the engine, and redraws.
//! Input and output are generic so the loop runs the same against a
//! terminal or an in-memory buffer.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use themed_tictactoe::{FirstMover, GameEngine, GameView, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  1-9 | <label>   play a cell (e.g. 5 or center)
  theme <n>       switch theme and start over
  replay <n>      go back to replay move <n>
  reset           play again
  themes          list themes
  help            show this help
  quit            leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a cell.
    Play(Position),
    /// Select a theme (1-based, never 0).
    Theme(usize),
    /// Jump to a replay position (1-based).
    Replay(usize),
    /// Start a new game with the same theme.
    Reset,
    /// List themes.
    Themes,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
}

impl Command {
    /// Parses an input line. Returns `None` for anything unrecognised.
    #[instrument]
    pub fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return None;
        }

        let number = || arg.and_then(|a| a.parse::<usize>().ok());
        match (head.as_str(), arg) {
            ("theme", Some(_)) => number().filter(|n| *n > 0).map(Command::Theme),
            ("replay", Some(_)) => number().map(Command::Replay),
            ("reset" | "again", None) => Some(Command::Reset),
            ("themes", None) => Some(Command::Themes),
            ("help" | "?", None) => Some(Command::Help),
            ("quit" | "exit" | "q", None) => Some(Command::Quit),
            (_, None) => Position::parse(&head).map(Command::Play),
            _ => None,
        }
    }
}

/// Draws a view as text.
pub fn render(view: &GameView) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = view.cells[index]
                    .clone()
                    .unwrap_or_else(|| (index + 1).to_string());
                if view.status.highlighted.contains(&index) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push_str(&view.status_text());
    out.push('\n');

    for item in &view.replay {
        out.push_str(&format!("  {}\n", item.label));
    }
    out
}

/// Lists themes with their 1-based numbers.
pub fn render_themes(view: &GameView) -> String {
    view.themes
        .iter()
        .map(|t| {
            let marker = if t.active { "*" } else { " " };
            format!("{} {}. {}\n", marker, t.index + 1, t.label)
        })
        .collect()
}

/// Runs the command loop until `quit` or end of input.
#[instrument(skip_all, fields(json = json))]
pub fn run<M, R, W>(engine: &mut GameEngine<M>, input: R, mut output: W, json: bool) -> Result<()>
where
    M: FirstMover,
    R: BufRead,
    W: Write,
{
    draw(engine, &mut output, json)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = Command::parse(&line) else {
            debug!(%line, "Unrecognised input");
            writeln!(output, "{}", HELP)?;
            continue;
        };

        match command {
            Command::Play(pos) => {
                if let MoveOutcome::Ignored(reason) = engine.play_position(pos) {
                    writeln!(output, "Ignored: {}", reason)?;
                    let open = open_cells(engine);
                    if !open.is_empty() {
                        writeln!(output, "Open cells: {}", open)?;
                    }
                    continue;
                }
            }
            Command::Theme(n) => {
                if let Err(err) = engine.select_theme(n - 1) {
                    warn!(%err, "Theme selection rejected");
                    writeln!(output, "No theme {}", n)?;
                    continue;
                }
            }
            Command::Replay(n) => {
                if let Err(err) = engine.jump_to_move(n) {
                    warn!(%err, "Replay rejected");
                    writeln!(output, "No replay move {}", n)?;
                    continue;
                }
            }
            Command::Reset => engine.reset_game(),
            Command::Themes => {
                write!(output, "{}", render_themes(&engine.view()))?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        draw(engine, &mut output, json)?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

/// 1-based numbers of the cells still playable, space separated.
fn open_cells<M: FirstMover>(engine: &GameEngine<M>) -> String {
    engine
        .open_positions()
        .iter()
        .map(|pos| (pos.to_index() + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn draw<M: FirstMover, W: Write>(engine: &GameEngine<M>, output: &mut W, json: bool) -> Result<()> {
    let view = engine.view();
    if json {
        let encoded = view.to_json().context("Failed to encode view")?;
        writeln!(output, "{}", encoded)?;
    } else {
        writeln!(output, "{}", render(&view))?;
    }
    Ok(())
}
