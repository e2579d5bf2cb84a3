//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::mover::FirstMover;
use crate::{GameEngine, HistoryLog};

/// Invariant: every history snapshot is its predecessor plus one mark.
///
/// No recorded mark is ever erased or changed, and the opening entry is
/// the empty board.
pub struct MonotonicHistoryInvariant;

impl MonotonicHistoryInvariant {
    /// Checks a history log on its own.
    pub fn holds_for(history: &HistoryLog) -> bool {
        let mut entries = history.entries();
        let Some(first) = entries.next() else {
            return false;
        };
        if first.snapshot().occupied_count() != 0 {
            return false;
        }

        history
            .entries()
            .zip(history.entries().skip(1))
            .all(|(before, after)| {
                let (before, after) = (before.snapshot(), after.snapshot());
                let changed: Vec<_> = before
                    .cells()
                    .iter()
                    .zip(after.cells())
                    .filter(|(b, a)| b != a)
                    .collect();
                matches!(changed.as_slice(), [(b, a)] if b.is_empty() && !a.is_empty())
            })
    }
}

impl<M: FirstMover> Invariant<GameEngine<M>> for MonotonicHistoryInvariant {
    fn holds(engine: &GameEngine<M>) -> bool {
        Self::holds_for(engine.history())
    }

    fn description() -> &'static str {
        "History snapshots only ever add one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Role};
    use std::sync::Arc;

    #[test]
    fn test_fresh_log_holds() {
        assert!(MonotonicHistoryInvariant::holds_for(&HistoryLog::new()));
    }

    #[test]
    fn test_single_mark_steps_hold() {
        let mut log = HistoryLog::new();
        let one = Board::new().with_move(4, "X").unwrap();
        let two = one.with_move(0, "O").unwrap();
        log.append(Arc::new(one), Role::X);
        log.append(Arc::new(two), Role::O);
        assert!(MonotonicHistoryInvariant::holds_for(&log));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut log = HistoryLog::new();
        let jump = Board::new()
            .with_move(4, "X")
            .and_then(|b| b.with_move(0, "O"))
            .unwrap();
        log.append(Arc::new(jump), Role::X);
        assert!(!MonotonicHistoryInvariant::holds_for(&log));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut log = HistoryLog::new();
        log.append(Arc::new(Board::new().with_move(4, "X").unwrap()), Role::X);
        log.append(Arc::new(Board::new().with_move(4, "O").unwrap()), Role::O);
        assert!(!MonotonicHistoryInvariant::holds_for(&log));
    }
}
