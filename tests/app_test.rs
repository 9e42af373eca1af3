//! Tests for terminal app input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{App, BoardLayout};
use tictactoe_core::{Cell, Game, Mark, Outcome, Position};

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

fn app_with_layout() -> (App, BoardLayout) {
    let layout = BoardLayout::new(Rect::new(0, 0, 80, 30));
    let mut app = App::new(true);
    app.set_layout(layout);
    (app, layout)
}

/// X wins along the top row.
fn win_for_x(app: &mut App) {
    for c in ['1', '4', '2', '5', '3'] {
        key(app, KeyCode::Char(c));
    }
}

#[test]
fn test_digit_keys_place_marks() {
    let mut app = App::new(true);
    key(&mut app, KeyCode::Char('5'));
    key(&mut app, KeyCode::Char('1'));

    let board = app.game().board();
    assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
    assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::O));
    assert_eq!(app.game().to_move(), Mark::X);
}

#[test]
fn test_click_on_taken_cell_changes_nothing() {
    let mut app = App::new(true);
    app.click(Position::Center);
    let before = app.game().clone();

    app.click(Position::Center);
    assert_eq!(app.game(), &before);
}

#[test]
fn test_clicks_after_win_change_nothing() {
    let mut app = App::new(true);
    win_for_x(&mut app);
    assert_eq!(app.game().outcome().winner(), Some(Mark::X));
    let before = app.game().clone();

    app.click(Position::BottomRight);
    key(&mut app, KeyCode::Char('9'));
    assert_eq!(app.game(), &before);
}

#[test]
fn test_cursor_and_enter_play() {
    let mut app = App::new(true);
    assert_eq!(app.cursor(), Position::Center);
    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Char('h'));
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(app.game().board().get(Position::TopLeft), Cell::Marked(Mark::X));
}

#[test]
fn test_replay_only_after_game_over() {
    let mut app = App::new(true);
    app.click(Position::Center);
    key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game().history(), &[Position::Center]);

    app.replay();
    assert_eq!(app.game().history().len(), 1);

    let mut app = App::new(true);
    win_for_x(&mut app);
    key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game(), &Game::new());
    assert_eq!(app.game().to_move(), Mark::X);
}

#[test]
fn test_mouse_click_places_mark() {
    let (mut app, layout) = app_with_layout();
    let rect = layout.cells[Position::BottomLeft.to_index()];
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), rect.x + 2, rect.y + 1);

    assert_eq!(app.game().board().get(Position::BottomLeft), Cell::Marked(Mark::X));
    assert_eq!(app.cursor(), Position::BottomLeft);
}

#[test]
fn test_other_mouse_events_are_ignored() {
    let (mut app, layout) = app_with_layout();
    let rect = layout.cells[Position::Center.to_index()];
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), rect.x + 1, rect.y + 1);
    mouse(&mut app, MouseEventKind::Moved, rect.x + 1, rect.y + 1);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 0, 0);

    assert_eq!(app.game(), &Game::new());
}

#[test]
fn test_click_before_first_frame_is_ignored() {
    let mut app = App::new(true);
    app.click_at(40, 15);
    assert_eq!(app.game(), &Game::new());
}

#[test]
fn test_mouse_replay_button() {
    let (mut app, layout) = app_with_layout();
    let (x, y) = (layout.replay.x + 1, layout.replay.y + 1);

    // Hidden while playing.
    app.click(Position::Center);
    app.click_at(x, y);
    assert_eq!(app.game().history().len(), 1);

    let mut app = App::new(true);
    app.set_layout(layout);
    win_for_x(&mut app);
    app.click_at(x, y);
    assert_eq!(app.game().outcome(), Outcome::Playing);
    assert!(app.game().history().is_empty());
}

#[test]
fn test_view_tracks_game() {
    let mut app = App::new(true);
    win_for_x(&mut app);
    let view = app.view();
    assert_eq!(view.status, "X wins");
    assert!(view.replay_visible);
    assert_eq!(
        view.highlighted(),
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = App::new(true);
        assert!(!app.should_quit());
        key(&mut app, code);
        assert!(app.should_quit());
    }
}
