//! Tic-tac-toe game logic.
//!
//! - [`Board`] holds nine [`Cell`]s in row-major order.
//! - [`evaluate`] maps a board to an [`Outcome`].
//! - [`Game`] owns the board, alternates turns and refuses illegal moves.
//! - [`GameView`] is the pure projection that front-ends render.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Mark, Position};
//!
//! let mut game = Game::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::BottomLeft, Position::TopRight] {
//!     game.play(pos).unwrap();
//! }
//! assert_eq!(game.outcome().winner(), Some(Mark::X));
//! assert!(game.play(Position::BottomRight).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod outcome;
mod position;
pub mod rules;
mod types;
mod view;

pub use error::{MoveError, ParseError, StateError};
pub use game::{Game, STARTING_MARK};
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine};
pub use types::{Board, Cell, Mark};
pub use view::{CellView, GameView};
