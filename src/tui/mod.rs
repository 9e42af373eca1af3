//! Terminal front-end.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for_key, move_cursor};
pub use layout::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};

use crate::config::Config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// Failing to take over the terminal aborts start-up. The terminal is
/// restored on every exit path after that.
#[instrument(skip_all, fields(show_hints = show_hints))]
pub fn run(config: &Config, show_hints: bool) -> Result<()> {
    info!("Starting terminal game");

    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;
    let mut app = App::new(show_hints);
    let res = run_app(&mut terminal, &mut app, config.tick_rate());
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(e) = &res {
        error!(error = ?e, "Game loop error");
    }
    res
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = release_terminal(&mut stdout);
        return Err(e.into());
    }
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = release_terminal(&mut io::stdout());
            Err(e.into())
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and turns raw mode off.
///
/// Every step runs even when an earlier one fails; the first error wins.
fn release_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
    let raw = disable_raw_mode();
    screen.and(raw)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    release_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Term, app: &mut App, tick_rate: Duration) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| {
            let layout = ui::draw(frame, app);
            app.set_layout(layout);
        })?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}
