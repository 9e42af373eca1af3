//! Terminal tic-tac-toe.
//!
//! Hot-seat play for two people at one keyboard (or mouse), on top of the
//! pure game logic in [`tictactoe_core`].
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): board, status evaluation, turn control
//! - **TUI**: [`App`] state, input mapping and `ratatui` rendering
//! - **CLI**: `play`, plus one-shot `eval` and `moves` commands
//! - **Config**: TOML settings, `.env`, and `tracing` setup
//!
//! # Example
//!
//! ```
//! use tictactoe::App;
//! use tictactoe_core::{Mark, Position};
//!
//! let mut app = App::new(true);
//! app.click(Position::Center);
//! app.click(Position::Center); // taken, ignored
//! assert_eq!(app.game().to_move(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod logging;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - One-shot commands
pub use commands::{eval, play_moves};

// Crate-level exports - Configuration and logging
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use logging::{LogTarget, init as init_logging};

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, BoardLayout, CELL_HEIGHT, CELL_WIDTH, Direction, action_for_key, move_cursor,
    run as run_tui,
};
