//! Core domain types for tic-tac-toe.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Abstract turn identity.
///
/// A role is independent of the symbol drawn on the board; the active
/// theme decides which symbol each role places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Role {
    /// The X role (first symbol of a theme).
    X,
    /// The O role (second symbol of a theme).
    O,
}

impl Role {
    /// Returns the opposing role.
    pub fn opponent(self) -> Self {
        match self {
            Role::X => Role::O,
            Role::O => Role::X,
        }
    }

    /// Maps a coin flip onto a role (`true` is X).
    pub fn from_is_x(is_x: bool) -> Self {
        if is_x { Role::X } else { Role::O }
    }

    /// Returns true for the X role.
    pub fn is_x(self) -> bool {
        matches!(self, Role::X)
    }
}

/// A single cell on the board.
///
/// Occupied cells keep the symbol that was active when the mark was placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a symbol.
    Marked(String),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }

    /// Returns true if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::with_move`] returns a fresh board and
/// leaves the original untouched, so recorded snapshots never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Gets the cell at a named position.
    pub fn at(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index).is_some_and(Cell::is_empty)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy of this board with `symbol` placed at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::IllegalMove`] if `index` is outside 0-8
    /// or the cell is already marked.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn with_move(&self, index: usize, symbol: &str) -> EngineResult<Board> {
        if !self.is_empty(index) {
            return Err(EngineError::new(EngineErrorKind::IllegalMove { index }));
        }

        let mut next = self.clone();
        next.cells[index] = Cell::Marked(symbol.to_string());
        Ok(next)
    }

    /// Builds a board from optional symbols, mostly for tests and fixtures.
    pub fn from_symbols<S: AsRef<str>>(symbols: [Option<S>; 9]) -> Self {
        let cells = symbols.map(|s| match s {
            Some(sym) => Cell::Marked(sym.as_ref().to_string()),
            None => Cell::Empty,
        });
        Self { cells }
    }

    /// Symbols per cell, `None` for empty cells.
    pub fn symbols(&self) -> Vec<Option<String>> {
        self.cells
            .iter()
            .map(|c| c.symbol().map(str::to_string))
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board with empty cells shown by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match &self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!((0..9).all(|i| board.is_empty(i)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(4, "X").expect("center is free");
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(&Cell::Marked("X".to_string())));
    }

    #[test]
    fn test_with_move_rejects_occupied() {
        let board = Board::new().with_move(0, "X").unwrap();
        let err = board.with_move(0, "O").unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::IllegalMove { index: 0 });
    }

    #[test]
    fn test_with_move_rejects_out_of_range() {
        let err = Board::new().with_move(9, "X").unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::IllegalMove { index: 9 });
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = Board::new().with_move(4, "🐔").unwrap();
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|🐔|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_role_opponent() {
        assert_eq!(Role::X.opponent(), Role::O);
        assert_eq!(Role::O.opponent(), Role::X);
        assert_eq!(Role::from_is_x(false), Role::O);
    }
}
