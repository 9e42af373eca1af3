//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, Position};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (default: play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a hot-seat game in the terminal
    Play {
        /// Hide the 1-9 key hints in empty cells
        #[arg(long)]
        no_hints: bool,
    },

    /// Evaluate a board such as "XXX/OO./..."
    Eval {
        /// Nine cells: X, O, or . _ - for empty; '/' and spaces are ignored
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play a sequence of moves from an empty board and report the result
    Moves {
        /// Cells as keys 1-9 or labels such as "center", X moves first
        #[arg(required = true)]
        positions: Vec<Position>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { no_hints: false }
    }
}
