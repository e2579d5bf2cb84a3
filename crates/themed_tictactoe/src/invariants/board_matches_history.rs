//! Board/history agreement invariant.

use super::Invariant;
use crate::GameEngine;
use crate::mover::FirstMover;

/// Invariant: the current board is the latest history snapshot.
pub struct BoardMatchesHistoryInvariant;

impl<M: FirstMover> Invariant<GameEngine<M>> for BoardMatchesHistoryInvariant {
    fn holds(engine: &GameEngine<M>) -> bool {
        **engine.history().last().snapshot() == *engine.board()
    }

    fn description() -> &'static str {
        "Current board equals the latest history snapshot"
    }
}
