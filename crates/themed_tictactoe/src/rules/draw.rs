//! Tie detection for tic-tac-toe.

use super::win::winning_line;
use crate::Board;
use tracing::instrument;

/// Checks if the board is a tie: every cell marked and no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_tie() {
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // X O X / X O O / O X X
        let board = Board::from_symbols([
            Some("X"), Some("O"), Some("X"),
            Some("X"), Some("O"), Some("O"),
            Some("O"), Some("X"), Some("X"),
        ]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        // X X X / O O X / X O O
        let board = Board::from_symbols([
            Some("X"), Some("X"), Some("X"),
            Some("O"), Some("O"), Some("X"),
            Some("X"), Some("O"), Some("O"),
        ]);
        assert!(!is_tie(&board));
    }
}
