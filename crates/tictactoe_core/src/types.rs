//! Core domain types for tic-tac-toe.

use super::error::{MoveError, ParseError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player A, always moves first.
    X,
    /// Player B.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by a player.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// True for an unclaimed cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, so the cell at `(row, col)` lives at
/// index `row * 3 + col`. A cell can only go from [`Cell::Empty`] to a mark;
/// the only way back to empty is a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// True if nobody has played at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Claims an empty cell for `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark. The
    /// board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            return Err(MoveError::Occupied(pos));
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of marks on the board.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = cells.iter().map(|cell| cell.symbol()).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parses the compact text form, e.g. `"XXX/OO./..."` or `"XO_ _X_ O__"`.
///
/// `X` and `O` (either case) are marks; `.`, `_` and `-` are empty cells.
/// `/` and whitespace only separate rows and are ignored.
impl FromStr for Board {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut len = 0;
        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '_' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseError::Cell(other)),
            };
            // Stop at the first cell past the ninth.
            let slot = cells.get_mut(len).ok_or(ParseError::Length(len + 1))?;
            *slot = cell;
            len += 1;
        }
        if len != cells.len() {
            return Err(ParseError::Length(len));
        }
        Ok(Self { cells })
    }
}
