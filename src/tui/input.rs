//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// Cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click a specific cell.
    Play(Position),
    /// Click the cell under the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Press the replay control.
    Replay,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action, `None` for unbound keys.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char(c @ '1'..='9') => Action::Play(Position::from_key(c.to_digit(10)?)?),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Replay,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one cell; it stops at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
