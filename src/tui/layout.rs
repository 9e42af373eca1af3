//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position as ScreenPosition, Rect};
use tictactoe_core::Position;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;
const REPLAY_WIDTH: u16 = 14;

/// Where every widget goes for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Title bar.
    pub title: Rect,
    /// Current-turn indicator.
    pub turn: Rect,
    /// The nine cells in board order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Replay button, drawn only once the game is over.
    pub replay: Rect,
    /// Key help.
    pub help: Rect,
}

impl BoardLayout {
    /// Lays out the screen inside `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // Title
                Constraint::Length(1),           // Turn
                Constraint::Min(GRID_HEIGHT),    // Board
                Constraint::Length(3),           // Status
                Constraint::Length(3),           // Replay
                Constraint::Length(1),           // Help
            ])
            .split(area);

        let grid = center_rect(chunks[2], GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + GAP),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + GAP),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        Self {
            title: chunks[0],
            turn: chunks[1],
            cells,
            status: chunks[3],
            replay: center_rect(chunks[4], REPLAY_WIDTH, chunks[4].height),
            help: chunks[5],
        }
    }

    /// The cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
    }

    /// True if a terminal coordinate falls on the replay button.
    pub fn hits_replay(&self, column: u16, row: u16) -> bool {
        self.replay.contains(ScreenPosition::new(column, row))
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
