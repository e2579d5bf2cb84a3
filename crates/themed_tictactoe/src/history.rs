//! Move history: an append-only, truncatable list of board snapshots.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::types::{Board, Role};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A recorded board and the role whose move produced it.
///
/// Snapshots are shared behind [`Arc`] and never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    snapshot: Arc<Board>,
    mover: Option<Role>,
}

impl HistoryEntry {
    /// The opening entry: empty board, nobody moved.
    pub fn initial() -> Self {
        Self {
            snapshot: Arc::new(Board::new()),
            mover: None,
        }
    }

    /// Returns the recorded board.
    pub fn snapshot(&self) -> &Arc<Board> {
        &self.snapshot
    }

    /// Returns the role that produced this board, `None` for the opening entry.
    pub fn mover(&self) -> Option<Role> {
        self.mover
    }
}

/// A history entry offered as a replay target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayTarget {
    /// 1-based position accepted by `GameEngine::jump_to_move`.
    pub position: usize,
    /// The entry at that position.
    pub entry: HistoryEntry,
}

/// Ordered history of snapshots.
///
/// Always holds at least the opening entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates a log holding only the opening entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Records a snapshot produced by `mover`.
    #[instrument(skip(self, snapshot), fields(len = self.entries.len()))]
    pub fn append(&mut self, snapshot: Arc<Board>, mover: Role) {
        self.entries.push(HistoryEntry {
            snapshot,
            mover: Some(mover),
        });
    }

    /// Keeps the first `n` entries and discards the rest.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidHistoryIndex`] unless `1 <= n <= len`.
    #[track_caller]
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_to(&mut self, n: usize) -> EngineResult<()> {
        if n == 0 || n > self.entries.len() {
            return Err(EngineError::new(EngineErrorKind::InvalidHistoryIndex {
                position: n,
                available: self.entries.len(),
            }));
        }
        debug!(dropped = self.entries.len() - n, "Truncating history");
        self.entries.truncate(n);
        Ok(())
    }

    /// Iterates entries in the order they were recorded.
    ///
    /// Each call starts a fresh iterator.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + Clone + '_ {
        self.entries.iter()
    }

    /// Entries that can be replayed: all but the latest, with 1-based positions.
    pub fn replay_targets(&self) -> impl Iterator<Item = ReplayTarget> + '_ {
        let replayable = self.entries.len().saturating_sub(1);
        self.entries
            .iter()
            .take(replayable)
            .enumerate()
            .map(|(i, entry)| ReplayTarget {
                position: i + 1,
                entry: entry.clone(),
            })
    }

    /// Gets an entry by 0-based index.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// The most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        // `entries` is never empty: `new` seeds it and `truncate_to` keeps at least one.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries, including the opening one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the opening entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with_moves(moves: &[(usize, Role)]) -> HistoryLog {
        let mut log = HistoryLog::new();
        for &(index, role) in moves {
            let board = log
                .last()
                .snapshot()
                .with_move(index, &role.to_string())
                .unwrap();
            log.append(Arc::new(board), role);
        }
        log
    }

    #[test]
    fn test_new_log_has_opening_entry() {
        let log = HistoryLog::new();
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().mover(), None);
        assert_eq!(**log.last().snapshot(), Board::new());
    }

    #[test]
    fn test_append_keeps_order() {
        let log = log_with_moves(&[(0, Role::X), (4, Role::O)]);
        let movers: Vec<_> = log.entries().map(HistoryEntry::mover).collect();
        assert_eq!(movers, vec![None, Some(Role::X), Some(Role::O)]);
    }

    #[test]
    fn test_entries_is_restartable() {
        let log = log_with_moves(&[(0, Role::X)]);
        assert_eq!(log.entries().count(), 2);
        assert_eq!(log.entries().count(), 2);
    }

    #[test]
    fn test_truncate_to() {
        let mut log = log_with_moves(&[(0, Role::X), (4, Role::O), (8, Role::X)]);
        log.truncate_to(2).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().mover(), Some(Role::X));
    }

    #[test]
    fn test_truncate_to_zero_fails() {
        let mut log = log_with_moves(&[(0, Role::X)]);
        let err = log.truncate_to(0).unwrap_err();
        assert!(matches!(
            err.kind(),
            EngineErrorKind::InvalidHistoryIndex { position: 0, .. }
        ));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_truncate_past_end_fails() {
        let mut log = HistoryLog::new();
        assert!(log.truncate_to(2).is_err());
    }

    #[test]
    fn test_replay_targets_exclude_latest() {
        let log = log_with_moves(&[(0, Role::X), (4, Role::O)]);
        let positions: Vec<usize> = log.replay_targets().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(HistoryLog::new().replay_targets().count(), 0);
    }

    #[test]
    fn test_snapshots_survive_later_moves() {
        let log = log_with_moves(&[(0, Role::X)]);
        let first = Arc::clone(log.get(1).unwrap().snapshot());
        let mut log = log;
        let next = first.with_move(1, "O").unwrap();
        log.append(Arc::new(next), Role::O);
        assert!(first.is_empty(1));
    }
}
