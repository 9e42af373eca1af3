//! One-shot commands that print a board and its outcome.

use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_core::{Board, Game, Mark, Outcome, Position, evaluate};
use tracing::{info, instrument};

/// Machine-readable summary of a board.
#[derive(Debug, Serialize)]
struct Report {
    board: String,
    outcome: Outcome,
    status: String,
    winning_cells: Option<[usize; 3]>,
    to_move: Option<Mark>,
}

impl Report {
    fn new(board: &Board, outcome: Outcome, to_move: Option<Mark>) -> Self {
        Self {
            board: board.to_string().replace('\n', "/"),
            outcome,
            status: outcome.to_string(),
            winning_cells: outcome.winning_cells().map(|cells| cells.map(Position::to_index)),
            to_move: to_move.filter(|_| !outcome.is_over()),
        }
    }

    fn render(&self, board: &Board, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string_pretty(self).context("Failed to serialize report");
        }
        let mut text = format!("{board}\n{}", self.status);
        if let Some(cells) = self.winning_cells {
            text.push_str(&format!(" (cells {:?})", cells));
        }
        if let Some(mark) = self.to_move {
            text.push_str(&format!(", {mark} to move"));
        }
        Ok(text)
    }
}

/// Evaluates `board` and renders the result.
#[instrument(skip(board))]
pub fn eval(board: &Board, json: bool) -> Result<String> {
    let outcome = evaluate(board);
    info!(%outcome, "Evaluated board");
    Report::new(board, outcome, None).render(board, json)
}

/// Plays `moves` from an empty board and renders the final position.
///
/// # Errors
///
/// Fails on the first refused move, naming it.
#[instrument]
pub fn play_moves(moves: &[Position], json: bool) -> Result<String> {
    let mut game = Game::new();
    for (turn, pos) in moves.iter().enumerate() {
        game.play(*pos)
            .with_context(|| format!("Move {} ({}) refused", turn + 1, pos))?;
    }
    info!(outcome = %game.outcome(), moves = moves.len(), "Played moves");
    Report::new(game.board(), game.outcome(), Some(game.to_move())).render(game.board(), json)
}
