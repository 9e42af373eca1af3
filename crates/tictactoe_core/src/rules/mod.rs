//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the evaluator and the controller share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, winning_line};
