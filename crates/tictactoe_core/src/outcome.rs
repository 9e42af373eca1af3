//! Game outcome and the status evaluator.

use crate::rules::{WinLine, is_full, winning_line};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    #[default]
    Playing,
    /// The board is full with no winner.
    Draw,
    /// `mark` completed `line`.
    Won {
        /// The winning player.
        mark: Mark,
        /// The completed line.
        line: WinLine,
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            Outcome::Playing | Outcome::Draw => None,
        }
    }

    /// The three winning cells, for highlighting.
    pub fn winning_cells(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Won { line, .. } => Some(line.positions()),
            Outcome::Playing | Outcome::Draw => None,
        }
    }

    /// True once the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Playing => write!(f, "Playing"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Won { mark, .. } => write!(f, "{mark} wins"),
        }
    }
}

/// Evaluates a board.
///
/// The first completed line in [`WIN_LINES`](crate::WIN_LINES) order decides
/// the winner. Without one, a full board is a draw and anything else is still
/// in play.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some((mark, line)) = winning_line(board) {
        Outcome::Won { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Playing
    };
    trace!(%outcome, "Evaluated board");
    outcome
}
