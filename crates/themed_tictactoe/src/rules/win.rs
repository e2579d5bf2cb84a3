//! Win detection for tic-tac-toe.

use super::draw::is_tie;
use crate::{Board, Cell, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight three-in-a-row lines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Line {
    /// Row 0-1-2.
    TopRow,
    /// Row 3-4-5.
    MiddleRow,
    /// Row 6-7-8.
    BottomRow,
    /// Column 0-3-6.
    LeftColumn,
    /// Column 1-4-7.
    CenterColumn,
    /// Column 2-5-8.
    RightColumn,
    /// Diagonal 0-4-8.
    Diagonal,
    /// Diagonal 2-4-6.
    AntiDiagonal,
}

impl Line {
    /// All lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// True if all three cells hold the same symbol.
    pub fn is_complete(self, board: &Board) -> bool {
        let [a, b, c] = self.positions().map(|p| board.at(p));
        matches!(a, Cell::Marked(_)) && a == b && b == c
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// Moves remain and nobody has three in a row.
    Ongoing,
    /// A line is complete.
    Won(Line),
    /// Every cell is marked and no line is complete.
    Tied,
}

/// Returns the first complete line, scanning rows, columns, then diagonals.
///
/// Symbols compare by exact string equality, so a line only counts when
/// all three marks came from the same theme symbol.
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::ALL.into_iter().find(|line| line.is_complete(board))
}

/// Classifies a board as ongoing, won, or tied.
///
/// Wins take precedence: a move that fills the last cell and completes a
/// line is a win, not a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(line) = winning_line(board) {
        return Evaluation::Won(line);
    }
    if is_tie(board) {
        return Evaluation::Tied;
    }
    Evaluation::Ongoing
}
