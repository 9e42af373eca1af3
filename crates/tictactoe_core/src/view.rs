//! Presentation projection of a [`Game`].
//!
//! Renderers draw a [`GameView`] and never look at game internals, so
//! everything a screen needs to show is decided here.

use crate::{Cell, Game, Mark, Outcome, Position};
use serde::Serialize;

/// What to draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// Its contents.
    pub cell: Cell,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// Everything a front-end shows for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The nine cells in board order.
    pub cells: [CellView; 9],
    /// Mark shown in the current-turn indicator.
    pub turn: Mark,
    /// The evaluated outcome.
    pub outcome: Outcome,
    /// Status line text.
    pub status: String,
    /// Whether the replay control is offered.
    pub replay_visible: bool,
}

impl GameView {
    /// The view of cell `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }

    /// Positions to highlight, in board order.
    pub fn highlighted(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.highlighted)
            .map(|cell| cell.position)
            .collect()
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let outcome = game.outcome();
        let winning = outcome.winning_cells();
        let cells = Position::ALL.map(|position| CellView {
            position,
            cell: game.board().get(position),
            highlighted: winning.is_some_and(|cells| cells.contains(&position)),
        });

        Self {
            cells,
            turn: game.to_move(),
            outcome,
            status: outcome.to_string(),
            replay_visible: outcome.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_view() {
        let view = GameView::from(&Game::new());
        assert_eq!(view.turn, Mark::X);
        assert_eq!(view.status, "Playing");
        assert!(!view.replay_visible);
        assert!(view.highlighted().is_empty());
    }

    #[test]
    fn test_win_highlights_only_the_line() {
        let game = Game::from_moves(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomRight,
        ])
        .unwrap();
        let view = GameView::from(&game);

        assert_eq!(view.status, "X wins");
        assert!(view.replay_visible);
        assert_eq!(
            view.highlighted(),
            vec![Position::TopLeft, Position::Center, Position::BottomRight]
        );
        assert!(!view.cell(Position::MiddleLeft).highlighted);
    }
}
