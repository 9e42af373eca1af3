//! Error types for the game core.

use super::outcome::Outcome;
use super::position::Position;

/// Why a move was refused.
///
/// A refused move never changes the game. Front-ends usually drop these
/// silently: clicking a taken cell or clicking after the game ended is a
/// no-op, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),

    /// The game has already been decided.
    #[display("Game is already over: {_0}")]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}

/// Failure to read a board or position from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Wrong number of cells in a board string.
    #[display("Board must have 9 cells, found {_0}")]
    Length(usize),

    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("Unexpected board character {_0:?}")]
    Cell(char),

    /// Not a key number (1-9) or a known label.
    #[display("Unknown position {_0:?} (expected 1-9 or a label such as \"top-left\")")]
    Position(String),
}

impl std::error::Error for ParseError {}

/// Saved game state that normal play could never have produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// Three positions that are not one of the eight winning lines.
    #[display("Not a winning line: {_0:?}")]
    NotAWinLine([Position; 3]),

    /// The move history contains a move the game would refuse.
    #[display("History does not replay: {_0}")]
    History(MoveError),

    /// A stored field disagrees with the game rebuilt from its history.
    #[display("Stored {_0} does not match the replayed history")]
    Mismatch(&'static str),
}

impl std::error::Error for StateError {}
