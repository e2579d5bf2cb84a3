//! Alternating mover invariant: roles take turns.

use super::Invariant;
use crate::mover::FirstMover;
use crate::{GameEngine, HistoryLog, Role};

/// Invariant: recorded movers alternate and the next mover follows suit.
///
/// The opening entry has no mover; every later entry has one, and no role
/// appears twice in a row. Whatever role opened the game is fine.
pub struct AlternatingMoverInvariant;

impl AlternatingMoverInvariant {
    /// Checks a history log and the role due to move next.
    pub fn holds_for(history: &HistoryLog, next: Role) -> bool {
        let movers: Vec<Option<Role>> = history.entries().map(|e| e.mover()).collect();

        let Some((opening, rest)) = movers.split_first() else {
            return false;
        };
        if opening.is_some() || rest.iter().any(Option::is_none) {
            return false;
        }
        if rest.windows(2).any(|w| w[0] == w[1]) {
            return false;
        }

        match rest.last() {
            Some(Some(last)) => next == last.opponent(),
            _ => true,
        }
    }
}

impl<M: FirstMover> Invariant<GameEngine<M>> for AlternatingMoverInvariant {
    fn holds(engine: &GameEngine<M>) -> bool {
        Self::holds_for(engine.history(), engine.mover())
    }

    fn description() -> &'static str {
        "Roles alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn log(moves: &[(usize, Role)]) -> HistoryLog {
        let mut log = HistoryLog::new();
        for &(index, role) in moves {
            let board = log.last().snapshot().with_move(index, &role.to_string()).unwrap();
            log.append(Arc::new(board), role);
        }
        log
    }

    #[test]
    fn test_any_role_may_open() {
        assert!(AlternatingMoverInvariant::holds_for(&log(&[]), Role::O));
        assert!(AlternatingMoverInvariant::holds_for(&log(&[(0, Role::O)]), Role::X));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let history = log(&[(0, Role::X), (4, Role::O), (8, Role::X)]);
        assert!(AlternatingMoverInvariant::holds_for(&history, Role::O));
    }

    #[test]
    fn test_same_role_twice_violates() {
        let history = log(&[(0, Role::X), (4, Role::X)]);
        assert!(!AlternatingMoverInvariant::holds_for(&history, Role::O));
    }

    #[test]
    fn test_wrong_next_mover_violates() {
        let history = log(&[(0, Role::X)]);
        assert!(!AlternatingMoverInvariant::holds_for(&history, Role::X));
    }
}
