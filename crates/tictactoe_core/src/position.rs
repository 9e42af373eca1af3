//! Named cells of the 3x3 grid.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Discriminants follow row-major order, which is also the board index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position at `(row, col)`, both 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The 1-9 key that selects this cell in the terminal UI.
    pub fn key(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Position selected by a 1-9 key number.
    pub fn from_key(key: u32) -> Option<Self> {
        key.checked_sub(1)
            .and_then(|index| Self::from_index(index as usize))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a key number (`"5"`) or a label (`"center"`, `"Top Left"`,
/// `"bottom_right"`). Labels are matched whole, ignoring case and separators.
impl FromStr for Position {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(key) = trimmed.parse::<u32>() {
            return Self::from_key(key).ok_or_else(|| ParseError::Position(s.to_string()));
        }

        let wanted = normalize(trimmed);
        Position::iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(|| ParseError::Position(s.to_string()))
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
