//! Turn and board controller.

use crate::error::{MoveError, StateError};
use crate::outcome::{Outcome, evaluate};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The first player after start-up and after every replay.
pub const STARTING_MARK: Mark = Mark::X;

/// Complete state of one game.
///
/// This is the only mutable game state; front-ends own one `Game` and feed
/// it cell clicks and replay requests.
///
/// Deserializing replays the stored history and rejects state that does not
/// match it, so a decoded game always obeys the same rules as a played one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: STARTING_MARK,
            outcome: Outcome::Playing,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Stops at the first refused move and returns its error.
    #[instrument]
    pub fn from_moves(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that the next accepted move will place.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Positions played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Positions that would be accepted right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_over() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Plays the current mark at `pos`.
    ///
    /// On success the turn passes to the other player, even when the move
    /// ends the game, and the new outcome is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is decided
    /// - [`MoveError::Occupied`] if `pos` already holds a mark
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver(self.outcome));
        }

        self.board.place(pos, self.to_move)?;
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        self.outcome = evaluate(&self.board);

        if self.outcome.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game finished");
        } else {
            debug!(next = %self.to_move, "Move accepted");
        }
        Ok(self.outcome)
    }

    /// Starts over: empty board, X to move, still playing.
    #[instrument(skip(self))]
    pub fn replay(&mut self) {
        debug!(previous = %self.outcome, "Replaying");
        *self = Self::new();
    }
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl TryFrom<SavedGame> for Game {
    type Error = StateError;

    #[instrument(skip_all, fields(moves = saved.history.len()))]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let game = Self::from_moves(&saved.history).map_err(StateError::History)?;
        if game.board != saved.board {
            return Err(StateError::Mismatch("board"));
        }
        if game.to_move != saved.to_move {
            return Err(StateError::Mismatch("turn"));
        }
        if game.outcome != saved.outcome {
            return Err(StateError::Mismatch("outcome"));
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
