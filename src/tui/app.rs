//! Application state and logic.

use super::input::{Action, action_for_key, move_cursor};
use super::layout::BoardLayout;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::{Game, GameView, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Every way of choosing a cell (number key, cursor, mouse) ends up in
/// [`App::click`], so there is a single place where moves are accepted or
/// ignored.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    layout: Option<BoardLayout>,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hints: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            layout: None,
            show_hints,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Projects the game for rendering.
    pub fn view(&self) -> GameView {
        GameView::from(&self.game)
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Set once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the layout of the last drawn frame for mouse hit-testing.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = Some(layout);
    }

    /// Handles a click on `pos`.
    ///
    /// Clicks on taken cells or after the game ended change nothing.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        match self.game.play(pos) {
            Ok(outcome) => debug!(%outcome, "Move applied"),
            Err(e) => debug!(error = %e, "Click ignored"),
        }
    }

    /// Presses the replay control.
    ///
    /// The control only exists once the game is over; before that this does
    /// nothing.
    #[instrument(skip(self))]
    pub fn replay(&mut self) {
        if !self.game.outcome().is_over() {
            debug!("Replay ignored while playing");
            return;
        }
        info!(previous = %self.game.outcome(), "Starting a new game");
        self.game.replay();
        self.cursor = Position::Center;
    }

    /// Applies an input action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.click(pos),
            Action::PlayCursor => self.click(self.cursor),
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::Replay => self.replay(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for_key(key) {
            self.handle_action(action);
        }
    }

    /// Handles a mouse event; only left-button presses do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.click_at(mouse.column, mouse.row);
        }
    }

    /// Handles a click at a terminal coordinate.
    #[instrument(skip(self))]
    pub fn click_at(&mut self, column: u16, row: u16) {
        let Some(layout) = self.layout else {
            debug!("Click before first frame");
            return;
        };
        if let Some(pos) = layout.cell_at(column, row) {
            self.click(pos);
        } else if self.game.outcome().is_over() && layout.hits_replay(column, row) {
            self.replay();
        }
    }
}
