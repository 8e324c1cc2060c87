//! Terminal status detection: mate, stalemate, fifty-move rule, repetition.

use super::{diagram, play, sq};
use crate::board::{parse_coordinate_move, Color, MoveError, Position};
use crate::config::GameConfig;
use crate::game::{GameState, TerminalStatus};

fn submit(game: &mut GameState, notation: &str) -> TerminalStatus {
    let (from, to, promotion) = parse_coordinate_move(notation).unwrap();
    game.submit_move(from, to, promotion)
        .unwrap_or_else(|err| panic!("{notation} rejected: {err}"))
        .status
}

#[test]
fn test_fools_mate() {
    let mut game = GameState::new();
    let statuses: Vec<TerminalStatus> = ["f2f3", "e7e5", "g2g4", "d8h4"]
        .iter()
        .map(|mv| submit(&mut game, mv))
        .collect();
    assert_eq!(
        statuses,
        vec![
            TerminalStatus::InProgress,
            TerminalStatus::InProgress,
            TerminalStatus::InProgress,
            TerminalStatus::Checkmate(Color::Black),
        ]
    );
    assert_eq!(game.move_count(), 4);
    assert!(game.is_check());
    assert!(game.legal_moves().is_empty());
    assert_eq!(
        game.submit_move(sq("e2"), sq("e4"), None),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_stalemate_king_and_pawn() {
    let position = diagram([
        "k.......",
        "P.......",
        "..K.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])
    .build()
    .unwrap();
    let mut game = GameState::from_position(position);
    assert_eq!(game.status(), TerminalStatus::InProgress);
    assert_eq!(submit(&mut game, "c6b6"), TerminalStatus::Stalemate);
    assert!(!game.is_check());
    assert!(game.legal_moves_for(sq("a8")).is_empty());
}

#[test]
fn test_stalemate_detected_on_construction() {
    let position = diagram([
        ".......k",
        ".....Q..",
        "......K.",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])
    .side_to_move(Color::Black)
    .build()
    .unwrap();
    assert!(!position.has_legal_move());
    assert_eq!(
        GameState::from_position(position).status(),
        TerminalStatus::Stalemate
    );
}

#[test]
fn test_fifty_move_rule_draw() {
    let position = diagram([
        "k.......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "K......R",
    ])
    .halfmove_clock(99)
    .build()
    .unwrap();
    let mut game = GameState::from_position(position);
    assert_eq!(game.status(), TerminalStatus::InProgress);
    assert_eq!(submit(&mut game, "h1h2"), TerminalStatus::DrawByFiftyMove);
}

#[test]
fn test_halfmove_resets_on_pawn_move() {
    let position = diagram([
        "k.......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....P...",
        "K.......",
    ])
    .halfmove_clock(99)
    .build()
    .unwrap();
    let mut game = GameState::from_position(position);
    assert_eq!(submit(&mut game, "e2e4"), TerminalStatus::InProgress);
    assert_eq!(game.position().halfmove_clock(), 0);
}

#[test]
fn test_mate_takes_precedence_over_fifty_moves() {
    let position = diagram([
        "k.......",
        "........",
        ".K......",
        "........",
        "........",
        "........",
        "........",
        ".......R",
    ])
    .halfmove_clock(99)
    .build()
    .unwrap();
    let mut game = GameState::from_position(position);
    assert_eq!(submit(&mut game, "h1h8"), TerminalStatus::Checkmate(Color::White));
}

#[test]
fn test_threefold_repetition() {
    let mut game = GameState::new();
    for mv in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"] {
        assert_eq!(submit(&mut game, mv), TerminalStatus::InProgress);
    }
    assert_eq!(game.repetition_count(), 2);
    assert_eq!(submit(&mut game, "f6g8"), TerminalStatus::DrawByRepetition);
    assert_eq!(game.repetition_count(), 3);
}

#[test]
fn test_repetition_limit_is_configurable() {
    let config = GameConfig {
        repetition_limit: 2,
        ..GameConfig::default()
    };
    let mut game = GameState::with_config(config);
    for mv in ["g1f3", "g8f6", "f3g1"] {
        submit(&mut game, mv);
    }
    assert_eq!(submit(&mut game, "f6g8"), TerminalStatus::DrawByRepetition);
}

#[test]
fn test_repetition_ignores_unusable_en_passant_target() {
    let mut after_double = Position::new();
    play(&mut after_double, &["g1f3", "g8f6", "e2e4"]);
    assert_eq!(after_double.en_passant_target(), Some(sq("e3")));
    assert!(!after_double.en_passant_available());

    // The bishop's f1-e2-d3 triangle hands Black the move.
    let mut after_two_singles = Position::new();
    play(
        &mut after_two_singles,
        &[
            "e2e3", "g8f6", "f1e2", "f6g8", "e2d3", "g8f6", "d3f1", "f6g8", "e3e4", "g8f6",
            "g1f3",
        ],
    );
    assert_eq!(after_two_singles.side_to_move(), after_double.side_to_move());
    assert_eq!(after_two_singles.en_passant_target(), None);
    assert_eq!(after_double.board(), after_two_singles.board());
    assert_eq!(after_double.zobrist_key(), after_two_singles.zobrist_key());
}

#[test]
fn test_repetition_ignores_pinned_en_passant_capture() {
    // b5xc6 would open the fifth rank to the rook on h5.
    let pinned = diagram([
        "....k...",
        "........",
        "........",
        "KPp....r",
        "........",
        "........",
        "........",
        "........",
    ])
    .en_passant(sq("c6"))
    .build()
    .unwrap();
    assert!(!pinned.legal_moves_from(sq("b5")).iter().any(|mv| mv.is_en_passant()));
    assert!(!pinned.en_passant_available());

    let mut no_target = pinned.clone();
    no_target.en_passant_target = None;
    assert_eq!(pinned.zobrist_key(), no_target.zobrist_key());
}

#[test]
fn test_repetition_counts_usable_en_passant_target() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "g8f6", "e4e5", "d7d5"]);
    assert!(position.en_passant_available());
    let mut no_target = position.clone();
    no_target.en_passant_target = None;
    assert_ne!(position.zobrist_key(), no_target.zobrist_key());
}

#[test]
fn test_timeout_overrides_and_is_final() {
    let mut game = GameState::new();
    submit(&mut game, "e2e4");
    assert_eq!(
        game.on_time_expired(Color::White),
        TerminalStatus::Timeout(Color::Black)
    );
    assert_eq!(game.undo(), None);
    assert_eq!(
        game.on_time_expired(Color::Black),
        TerminalStatus::Timeout(Color::Black)
    );
    assert_eq!(
        game.submit_move(sq("e7"), sq("e5"), None),
        Err(MoveError::GameOver)
    );
    assert!(game.legal_moves_for(sq("e7")).is_empty());
}

#[test]
fn test_timeout_after_mate_keeps_mate() {
    let mut game = GameState::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        submit(&mut game, mv);
    }
    assert_eq!(
        game.on_time_expired(Color::Black),
        TerminalStatus::Checkmate(Color::Black)
    );
}

#[test]
fn test_undo_reopens_finished_game() {
    let mut game = GameState::new();
    for mv in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"] {
        submit(&mut game, mv);
    }
    assert_eq!(game.status(), TerminalStatus::DrawByRepetition);
    let undone = game.undo().unwrap();
    assert_eq!(undone.mv.to_string(), "f6g8");
    assert_eq!(game.status(), TerminalStatus::InProgress);
    assert_eq!(game.repetition_count(), 2);
    assert_eq!(submit(&mut game, "f6g8"), TerminalStatus::DrawByRepetition);
}
