//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Cell index outside 0-8, or the cell already holds a mark.
    #[display("Illegal move at cell {}", index)]
    IllegalMove {
        /// Requested cell index.
        index: usize,
    },

    /// Theme index outside the configured theme table.
    #[display("Theme {} does not exist ({} themes available)", index, available)]
    InvalidTheme {
        /// Requested theme index.
        index: usize,
        /// Number of themes in the table.
        available: usize,
    },

    /// History position outside the recorded range.
    #[display("History position {} is out of range (1..={})", position, available)]
    InvalidHistoryIndex {
        /// Requested position.
        position: usize,
        /// Highest accepted position.
        available: usize,
    },
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error details.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Convenience result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
