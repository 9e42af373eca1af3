//! Tests for the turn and board controller.

use tictactoe_core::{Cell, Game, GameView, Mark, MoveError, Outcome, Position};

use Position::*;

#[test]
fn test_new_game_initial_state() {
    let game = Game::new();
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.outcome(), Outcome::Playing);
    assert!(game.history().is_empty());
    assert_eq!(game.valid_moves().len(), 9);
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new();
    game.play(Center).unwrap();
    assert_eq!(game.board().get(Center), Cell::Marked(Mark::X));
    assert_eq!(game.to_move(), Mark::O);

    game.play(TopLeft).unwrap();
    assert_eq!(game.board().get(TopLeft), Cell::Marked(Mark::O));
    assert_eq!(game.to_move(), Mark::X);
}

#[test]
fn test_occupied_cell_is_refused_without_change() {
    let mut game = Game::new();
    game.play(Center).unwrap();
    let before = game.clone();

    assert_eq!(game.play(Center), Err(MoveError::Occupied(Center)));
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_win_are_refused() {
    let mut game = Game::from_moves(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
    assert_eq!(game.outcome().winner(), Some(Mark::X));
    let before = game.clone();

    let err = game.play(BottomRight).unwrap_err();
    assert!(matches!(err, MoveError::GameOver(Outcome::Won { mark: Mark::X, .. })));
    assert_eq!(game, before);
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_turn_passes_on_final_move() {
    let game = Game::from_moves(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
    assert_eq!(game.to_move(), Mark::O);
}

#[test]
fn test_draw_game() {
    let mut game = Game::new();
    let moves = [
        TopLeft, Center, TopRight, TopCenter, MiddleLeft, MiddleRight, BottomCenter, BottomLeft,
    ];
    for pos in moves {
        assert_eq!(game.play(pos), Ok(Outcome::Playing));
    }
    assert_eq!(game.play(BottomRight), Ok(Outcome::Draw));
    assert_eq!(game.play(BottomRight), Err(MoveError::GameOver(Outcome::Draw)));
}

#[test]
fn test_replay_restores_initial_state() {
    let mut game = Game::from_moves(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
    game.replay();
    assert_eq!(game, Game::new());

    // Playable again, X first.
    game.play(Center).unwrap();
    assert_eq!(game.board().get(Center), Cell::Marked(Mark::X));
}

#[test]
fn test_from_moves_matches_incremental_play() {
    let moves = [Center, TopLeft, BottomRight, TopRight, BottomLeft];
    let mut game = Game::new();
    for pos in moves {
        game.play(pos).unwrap();
    }
    assert_eq!(Game::from_moves(&moves).unwrap(), game);
    assert_eq!(game.history(), &moves);
}

#[test]
fn test_from_moves_stops_at_refused_move() {
    let result = Game::from_moves(&[Center, Center]);
    assert_eq!(result, Err(MoveError::Occupied(Center)));
}

#[test]
fn test_view_after_draw_offers_replay_without_highlight() {
    let game = Game::from_moves(&[
        TopLeft, Center, TopRight, TopCenter, MiddleLeft, MiddleRight, BottomCenter, BottomLeft,
        BottomRight,
    ])
    .unwrap();
    let view = GameView::from(&game);
    assert_eq!(view.status, "Draw");
    assert!(view.replay_visible);
    assert!(view.highlighted().is_empty());
}

#[test]
fn test_game_serializes_outcome() {
    let game = Game::from_moves(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
    let json = serde_json::to_value(game.outcome()).unwrap();
    assert_eq!(json["Won"]["mark"], "X");
    assert_eq!(json["Won"]["line"], serde_json::json!(["TopLeft", "TopCenter", "TopRight"]));
}

#[test]
fn test_saved_game_restores_and_keeps_playing() {
    let game = Game::from_moves(&[TopLeft, Center, TopCenter, BottomLeft]).unwrap();
    let json = serde_json::to_string(&game).unwrap();

    let mut restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.play(TopRight).unwrap().winner(), Some(Mark::X));
}

#[test]
fn test_saved_game_with_stale_outcome_is_rejected() {
    let game = Game::from_moves(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]).unwrap();
    let mut json = serde_json::to_value(&game).unwrap();
    json["outcome"] = serde_json::json!("Playing");

    let err = serde_json::from_value::<Game>(json).unwrap_err();
    assert!(err.to_string().contains("outcome"), "{err}");
}

#[test]
fn test_saved_game_must_match_its_history() {
    let game = Game::from_moves(&[TopLeft, Center]).unwrap();

    let mut wrong_turn = serde_json::to_value(&game).unwrap();
    wrong_turn["to_move"] = serde_json::json!("O");
    assert!(serde_json::from_value::<Game>(wrong_turn).is_err());

    // Board says X won, history is empty.
    let forged = serde_json::json!({
        "board": { "cells": [
            { "Marked": "X" }, { "Marked": "X" }, { "Marked": "X" },
            { "Marked": "O" }, { "Marked": "O" }, "Empty",
            "Empty", "Empty", "Empty"
        ] },
        "to_move": "O",
        "outcome": "Playing",
        "history": []
    });
    assert!(serde_json::from_value::<Game>(forged).is_err());

    let repeated = serde_json::json!({
        "board": { "cells": [
            { "Marked": "X" }, "Empty", "Empty",
            "Empty", "Empty", "Empty",
            "Empty", "Empty", "Empty"
        ] },
        "to_move": "O",
        "outcome": "Playing",
        "history": ["TopLeft", "TopLeft"]
    });
    let err = serde_json::from_value::<Game>(repeated).unwrap_err();
    assert!(err.to_string().contains("already occupied"), "{err}");
}

#[test]
fn test_outcome_rejects_unknown_win_line() {
    let json = serde_json::json!({
        "Won": { "mark": "X", "line": ["Center", "Center", "Center"] }
    });
    assert!(serde_json::from_value::<Outcome>(json).is_err());

    let json = serde_json::json!({
        "Won": { "mark": "X", "line": ["TopLeft", "Center", "BottomRight"] }
    });
    let outcome: Outcome = serde_json::from_value(json).unwrap();
    assert_eq!(outcome.winning_cells(), Some([TopLeft, Center, BottomRight]));
}
