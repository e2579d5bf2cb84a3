//! Turn-based game engine.
//!
//! [`GameEngine`] owns the board, the move history, and the active theme,
//! and is the only thing that mutates them. Presentation code calls the
//! four operations ([`play_move`](GameEngine::play_move),
//! [`select_theme`](GameEngine::select_theme),
//! [`jump_to_move`](GameEngine::jump_to_move),
//! [`reset_game`](GameEngine::reset_game)) and reads back
//! [`view`](GameEngine::view).

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::history::HistoryLog;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::mover::{FirstMover, RandomFirstMover};
use crate::position::Position;
use crate::rules::{self, Evaluation, Line};
use crate::theme::{Theme, ThemeTable};
use crate::types::{Board, Role};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Phase and move outcome
// ─────────────────────────────────────────────────────────────

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are accepted.
    Playing,
    /// A line was completed by `winner`.
    Won {
        /// Role that played the winning move.
        winner: Role,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Tied,
}

impl GamePhase {
    /// True once the game is won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoredMove {
    /// The game is already won or tied.
    #[display("game is over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("cell {} is occupied", _0)]
    Occupied(usize),
    /// The index is not a board cell.
    #[display("cell {} is off the board", _0)]
    OutOfRange(usize),
}

/// Result of [`GameEngine::play_move`].
///
/// Ignored moves are normal user interaction (clicking a filled cell) and
/// leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The mark was placed; carries the evaluation of the new board.
    Applied(Evaluation),
    /// Nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

// ─────────────────────────────────────────────────────────────
//  Configuration
// ─────────────────────────────────────────────────────────────

/// Engine construction options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Themes offered to the players.
    themes: ThemeTable,
    /// Theme active in the first game.
    theme_index: usize,
}

impl EngineConfig {
    /// Creates a config with the built-in themes and the first theme active.
    pub fn new() -> Self {
        Self::default()
    }
}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Tic-tac-toe state machine with themes and replayable history.
#[derive(Debug, Clone)]
pub struct GameEngine<M: FirstMover = RandomFirstMover> {
    themes: ThemeTable,
    theme_index: usize,
    active_theme: Theme,
    board: Arc<Board>,
    mover: Role,
    phase: GamePhase,
    history: HistoryLog,
    first_mover: M,
}

impl GameEngine<RandomFirstMover> {
    /// Creates an engine with the built-in themes and an entropy-seeded
    /// first-mover coin.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_mover(RandomFirstMover::from_entropy())
    }
}

impl Default for GameEngine<RandomFirstMover> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FirstMover> GameEngine<M> {
    /// Creates an engine with the built-in themes and the given first-mover source.
    #[instrument]
    pub fn with_first_mover(first_mover: M) -> Self {
        let themes = ThemeTable::default();
        let active_theme = themes.first().clone();
        Self::assemble(themes, 0, active_theme, first_mover)
    }

    /// Creates an engine from a config.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidTheme`] if the configured theme index
    /// is outside the theme table.
    #[instrument(skip(config), fields(theme_index = config.theme_index))]
    pub fn with_config(config: EngineConfig, first_mover: M) -> EngineResult<Self> {
        let EngineConfig {
            themes,
            theme_index,
        } = config;
        let active_theme = themes.get(theme_index).cloned().ok_or_else(|| {
            EngineError::new(EngineErrorKind::InvalidTheme {
                index: theme_index,
                available: themes.len(),
            })
        })?;
        Ok(Self::assemble(themes, theme_index, active_theme, first_mover))
    }

    fn assemble(themes: ThemeTable, theme_index: usize, active_theme: Theme, mut first_mover: M) -> Self {
        let mover = first_mover.pick();
        info!(?mover, theme = %active_theme.label(), "New game");
        Self {
            themes,
            theme_index,
            active_theme,
            board: Arc::new(Board::new()),
            mover,
            phase: GamePhase::Playing,
            history: HistoryLog::new(),
            first_mover,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────

    /// Places the current role's mark at `index` (0-8).
    ///
    /// Ignored without error when the game is over, the index is off the
    /// board, or the cell is taken. Otherwise the new board is recorded in
    /// history, the turn passes to the other role, and the board is
    /// evaluated. On a win the role that just moved is the winner.
    #[instrument(skip(self), fields(mover = ?self.mover))]
    pub fn play_move(&mut self, index: usize) -> MoveOutcome {
        if self.phase.is_over() {
            debug!("Ignoring move: game is over");
            return MoveOutcome::Ignored(IgnoredMove::GameOver);
        }

        let symbol = self.active_theme.symbol_for(self.mover);
        let next = match self.board.with_move(index, symbol) {
            Ok(board) => Arc::new(board),
            Err(err) => {
                let reason = if index >= Board::SIZE {
                    IgnoredMove::OutOfRange(index)
                } else {
                    IgnoredMove::Occupied(index)
                };
                debug!(%err, %reason, "Ignoring move");
                return MoveOutcome::Ignored(reason);
            }
        };

        let mover = self.mover;
        self.history.append(Arc::clone(&next), mover);
        self.board = next;
        self.mover = mover.opponent();

        let evaluation = rules::evaluate(&self.board);
        match evaluation {
            Evaluation::Won(line) => {
                info!(winner = ?mover, %line, "Game won");
                self.phase = GamePhase::Won {
                    winner: mover,
                    line,
                };
            }
            Evaluation::Tied => {
                info!("Game tied");
                self.phase = GamePhase::Tied;
            }
            Evaluation::Ongoing => {}
        }

        self.check_invariants();
        MoveOutcome::Applied(evaluation)
    }

    /// Places the current role's mark at a named position.
    pub fn play_position(&mut self, pos: Position) -> MoveOutcome {
        self.play_move(pos.to_index())
    }

    /// Activates the theme at `index` and starts a fresh game.
    ///
    /// Marks already on the board were drawn with the old symbols, so a
    /// theme change always resets.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidTheme`] if `index` is outside the
    /// theme table; the engine is left unchanged.
    #[instrument(skip(self))]
    pub fn select_theme(&mut self, index: usize) -> EngineResult<()> {
        let theme = self.themes.get(index).cloned().ok_or_else(|| {
            EngineError::new(EngineErrorKind::InvalidTheme {
                index,
                available: self.themes.len(),
            })
        })?;

        info!(index, theme = %theme.label(), "Theme selected");
        self.theme_index = index;
        self.active_theme = theme;
        self.reset_game();
        Ok(())
    }

    /// Restores the board recorded at 1-based history `position` and
    /// discards every later entry.
    ///
    /// Valid positions are `1..history.len()`: the latest entry is the
    /// current board and is not a jump target. The game returns to
    /// [`GamePhase::Playing`] without re-evaluating the restored board, and
    /// the turn goes to the opponent of the role recorded for that entry
    /// (X when jumping to the opening entry).
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidHistoryIndex`] for positions out of
    /// range; the engine is left unchanged.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to_move(&mut self, position: usize) -> EngineResult<()> {
        let available = self.history.len() - 1;
        let entry = position
            .checked_sub(1)
            .filter(|_| position <= available)
            .and_then(|i| self.history.get(i))
            .cloned()
            .ok_or_else(|| {
                EngineError::new(EngineErrorKind::InvalidHistoryIndex {
                    position,
                    available,
                })
            })?;

        self.history.truncate_to(position)?;
        self.board = Arc::clone(entry.snapshot());
        self.mover = entry.mover().map_or(Role::X, Role::opponent);
        self.phase = GamePhase::Playing;

        info!(position, next = ?self.mover, "Jumped to history entry");
        self.check_invariants();
        Ok(())
    }

    /// Clears the board and history and picks a new first mover.
    /// The active theme is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board = Arc::new(Board::new());
        self.history = HistoryLog::new();
        self.phase = GamePhase::Playing;
        self.mover = self.first_mover.pick();
        info!(mover = ?self.mover, "Game reset");
        self.check_invariants();
    }

    // ─────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Role whose turn it is (after a finished game: the role that would be next).
    pub fn mover(&self) -> Role {
        self.mover
    }

    /// Current phase.
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// Winning role, once the game is won.
    pub fn winner(&self) -> Option<Role> {
        match self.phase {
            GamePhase::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Completed line, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.phase {
            GamePhase::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True when the game is won or tied.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// True when the game is tied.
    pub fn is_tie(&self) -> bool {
        matches!(self.phase, GamePhase::Tied)
    }

    /// The active theme.
    pub fn active_theme(&self) -> &Theme {
        &self.active_theme
    }

    /// Index of the active theme.
    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    /// All themes.
    pub fn themes(&self) -> &ThemeTable {
        &self.themes
    }

    /// Move history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Cells that can still be played.
    pub fn open_positions(&self) -> Vec<Position> {
        if self.phase.is_over() {
            return Vec::new();
        }
        Position::open(&self.board)
    }

    fn check_invariants(&self) {
        if !cfg!(any(debug_assertions, feature = "verification")) {
            return;
        }
        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Engine invariant violated");
            debug_assert!(false, "Engine invariant violated: {}", descriptions);
        }
    }
}
