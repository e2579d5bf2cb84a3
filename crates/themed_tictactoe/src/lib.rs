//! Themed tic-tac-toe - a turn-based game engine with replayable history
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshots; a move returns a new board
//! - **Rules**: pure win/tie classification over a board
//! - **History**: every board reached this game, shared behind `Arc`
//! - **Engine**: the state machine tying them together, with swappable
//!   symbol themes and an injected first-mover coin
//!
//! # Example
//!
//! ```
//! use themed_tictactoe::{FixedFirstMover, GameEngine, GamePhase, Role};
//!
//! let mut engine = GameEngine::with_first_mover(FixedFirstMover(Role::X));
//! for cell in [0, 1, 3, 4, 6] {
//!     engine.play_move(cell);
//! }
//! assert!(matches!(engine.phase(), GamePhase::Won { winner: Role::X, .. }));
//!
//! // Go back to the board after the second move and keep playing from there.
//! engine.jump_to_move(3).unwrap();
//! assert_eq!(engine.board().occupied_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod error;
mod history;
mod mover;
mod position;
mod theme;
mod types;
mod view;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Cell, Role};

// Crate-level exports - Rules
pub use rules::{Evaluation, Line, evaluate};

// Crate-level exports - History
pub use history::{HistoryEntry, HistoryLog, ReplayTarget};

// Crate-level exports - Themes
pub use theme::{Theme, ThemeConfigError, ThemeTable};

// Crate-level exports - Engine
pub use engine::{EngineConfig, GameEngine, GamePhase, IgnoredMove, MoveOutcome};
pub use error::{EngineError, EngineErrorKind, EngineResult};
pub use mover::{FirstMover, FixedFirstMover, RandomFirstMover, ScriptedFirstMover};
pub use view::{GameView, ReplayItem, StatusView, ThemeOption};
