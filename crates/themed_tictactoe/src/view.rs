//! Read model handed to presentation code.
//!
//! A [`GameView`] is a plain snapshot of everything a front-end needs to
//! draw one frame. It serializes to JSON for non-Rust front-ends.

use crate::engine::GameEngine;
use crate::mover::FirstMover;
use crate::rules::Line;
use crate::types::Role;
use serde::Serialize;
use tracing::instrument;

/// Status line inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    /// Board is full with no completed line.
    pub is_tie: bool,
    /// Game is won or tied.
    pub game_over: bool,
    /// X role is due to move next.
    pub is_x: bool,
    /// Active theme's X symbol.
    pub symbol_x: String,
    /// Active theme's O symbol.
    pub symbol_o: String,
    /// Active theme's accent color.
    pub accent: String,
    /// Winning role, if any.
    pub winner: Option<Role>,
    /// Winning line, for highlighting.
    pub winning_line: Option<Line>,
    /// Board indices of the winning line.
    pub highlighted: Vec<usize>,
}

impl StatusView {
    fn symbol(&self, role: Role) -> &str {
        match role {
            Role::X => &self.symbol_x,
            Role::O => &self.symbol_o,
        }
    }

    /// The sentence shown above the board.
    pub fn text(&self) -> String {
        if self.is_tie {
            return "☹️ ties are for quitters".to_string();
        }
        if let Some(winner) = self.winner {
            return format!("{} wins!", self.symbol(winner));
        }
        format!("Next player: {}", self.symbol(Role::from_is_x(self.is_x)))
    }
}

/// A history entry the player can jump back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayItem {
    /// 1-based position to pass to `jump_to_move`.
    pub position: usize,
    /// Text for the replay list.
    pub label: String,
}

/// A theme offered in the theme picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    /// Index to pass to `select_theme`.
    pub index: usize,
    /// Text for the picker.
    pub label: String,
    /// Whether this theme is active.
    pub active: bool,
}

/// Everything a front-end needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Symbol per cell in row-major order, `None` when empty.
    pub cells: Vec<Option<String>>,
    /// Status line inputs.
    pub status: StatusView,
    /// Replayable history positions, oldest first.
    pub replay: Vec<ReplayItem>,
    /// Theme picker entries.
    pub themes: Vec<ThemeOption>,
}

impl GameView {
    /// The sentence shown above the board.
    pub fn status_text(&self) -> String {
        self.status.text()
    }

    /// Serializes the view as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<M: FirstMover> GameEngine<M> {
    /// Builds the read model for the current state.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let theme = self.active_theme();
        let winning_line = self.winning_line();

        let status = StatusView {
            is_tie: self.is_tie(),
            game_over: self.is_game_over(),
            is_x: self.mover().is_x(),
            symbol_x: theme.symbol_x().clone(),
            symbol_o: theme.symbol_o().clone(),
            accent: theme.accent().clone(),
            winner: self.winner(),
            winning_line,
            highlighted: winning_line.map(|l| l.indices().to_vec()).unwrap_or_default(),
        };

        let replay = self
            .history()
            .replay_targets()
            .map(|target| ReplayItem {
                position: target.position,
                label: format!("Replay move: {}", target.position),
            })
            .collect();

        let themes = self
            .themes()
            .iter()
            .enumerate()
            .map(|(index, t)| ThemeOption {
                index,
                label: t.label(),
                active: index == self.theme_index(),
            })
            .collect();

        GameView {
            cells: self.board().symbols(),
            status,
            replay,
            themes,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedFirstMover, GameEngine, Role};

    #[test]
    fn test_fresh_view() {
        let engine = GameEngine::with_first_mover(FixedFirstMover(Role::O));
        let view = engine.view();
        assert!(view.cells.iter().all(Option::is_none));
        assert!(view.replay.is_empty());
        assert_eq!(view.status_text(), "Next player: 🥚");
        assert_eq!(view.themes.len(), 3);
        assert!(view.themes[0].active);
        assert_eq!(view.themes[1].label, "🧠 VS 💪");
    }

    #[test]
    fn test_winner_text_uses_winning_symbol() {
        let mut engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
        for index in [0, 1, 3, 4, 6] {
            engine.play_move(index);
        }
        let view = engine.view();
        assert!(view.status.game_over);
        assert_eq!(view.status_text(), "🐔 wins!");
        assert_eq!(view.status.highlighted, vec![0, 3, 6]);
    }

    #[test]
    fn test_replay_list_excludes_current() {
        let mut engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
        engine.play_move(4);
        engine.play_move(0);
        let labels: Vec<_> = engine.view().replay.into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Replay move: 1", "Replay move: 2"]);
    }

    #[test]
    fn test_view_serializes() {
        let mut engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
        engine.play_move(4);
        let json = engine.view().to_json().unwrap();
        assert!(json.contains("\"cells\""));
        assert!(json.contains("🐔"));
    }
}
