//! Win detection.

use crate::{Board, Mark, Position, StateError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when they hold the same mark.
///
/// Only the members of [`WIN_LINES`] exist; deserializing anything else fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Position; 3]")]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// True if `pos` is one of the three cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0.map(|pos| board.get(pos));
        match a.mark() {
            Some(mark) if a == b && b == c => Some(mark),
            _ => None,
        }
    }
}

impl TryFrom<[Position; 3]> for WinLine {
    type Error = StateError;

    fn try_from(positions: [Position; 3]) -> Result<Self, Self::Error> {
        WIN_LINES
            .into_iter()
            .find(|line| line.0 == positions)
            .ok_or(StateError::NotAWinLine(positions))
    }
}

/// Every winning line, in the order they are checked.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line and the mark that completed it.
///
/// Lines are scanned in [`WIN_LINES`] order, so a board with two completed
/// lines always reports the earlier one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}
