//! Self-check filtering and move validation tests.

use super::{diagram, find_move, play, sq};
use crate::board::{Color, MoveError, Piece, Position, Square};

#[test]
fn test_scholars_opening_blocks_rook_and_pins_pawn() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "e7e5", "d1h5"]);

    assert!(position.legal_destinations(sq("a8")).is_empty());
    assert!(position.legal_destinations(sq("c8")).is_empty());
    // Qh5 pins f7 against the king on e8.
    assert!(position.legal_destinations(sq("f7")).is_empty());
    assert_eq!(
        position.validate_move(sq("f7"), sq("f6"), None),
        Err(MoveError::LeavesKingInCheck)
    );
    assert!(!position.in_check());
}

#[test]
fn test_rook_behind_pawn_has_no_moves() {
    let position = Position::new();
    assert!(position.legal_moves_from(sq("a1")).is_empty());
    assert_eq!(
        position.validate_move(sq("a1"), sq("a3"), None),
        Err(MoveError::BlockedPath)
    );
}

#[test]
fn test_check_must_be_answered() {
    let position = diagram([
        "....k...",
        "........",
        "........",
        "........",
        "....r...",
        "........",
        "...P.N..",
        "...QK...",
    ])
    .build()
    .unwrap();
    assert!(position.in_check());

    let mut moves: Vec<String> = position
        .legal_moves()
        .iter()
        .map(ToString::to_string)
        .collect();
    moves.sort();
    // Block with the queen or knight, or step the king aside.
    assert_eq!(moves, vec!["d1e2", "e1f1", "f2e4"]);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let position = diagram([
        "....k...",
        "........",
        "........",
        "........",
        "........",
        "........",
        ".....r..",
        "K.......",
    ])
    .side_to_move(Color::White)
    .build()
    .unwrap();
    assert_eq!(
        position.validate_move(sq("a1"), sq("a2"), None),
        Err(MoveError::LeavesKingInCheck)
    );
    assert_eq!(
        position.legal_destinations(sq("a1")).into_iter().collect::<Vec<_>>(),
        vec![sq("b1")]
    );
}

#[test]
fn test_king_cannot_capture_protected_piece() {
    let position = diagram([
        "....k...",
        "........",
        "........",
        "........",
        "........",
        "..b.....",
        ".r......",
        "K.......",
    ])
    .build()
    .unwrap();
    assert_eq!(
        position.validate_move(sq("a1"), sq("b2"), None),
        Err(MoveError::LeavesKingInCheck)
    );
}

#[test]
fn test_no_legal_move_ever_captures_a_king() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "f7f6", "d2d4", "g7g5"]);
    let mate = find_move(&position, "d1h5");
    position.make_move(mate);
    assert!(position.in_check());
    assert!(!position.has_legal_move());
    for color in [Color::White, Color::Black] {
        let king = position.board().find_king(color).unwrap();
        assert!(position
            .pseudo_moves()
            .iter()
            .all(|mv| mv.to() != king || !position.is_legal(*mv)));
    }
}

#[test]
fn test_validate_move_reason_tags() {
    let position = Position::new();
    assert_eq!(
        position.validate_move(Square(8, 0), sq("a3"), None),
        Err(MoveError::OutOfBounds)
    );
    assert_eq!(
        position.validate_move(sq("e2"), Square(1, 9), None),
        Err(MoveError::OutOfBounds)
    );
    assert_eq!(
        position.validate_move(sq("e4"), sq("e5"), None),
        Err(MoveError::NoPieceAtOrigin)
    );
    assert_eq!(
        position.validate_move(sq("e7"), sq("e5"), None),
        Err(MoveError::WrongColorPiece)
    );
    assert_eq!(
        position.validate_move(sq("e2"), sq("e2"), None),
        Err(MoveError::IllegalMove)
    );
    assert_eq!(
        position.validate_move(sq("d1"), sq("d2"), None),
        Err(MoveError::DestinationOccupied)
    );
    assert_eq!(
        position.validate_move(sq("g1"), sq("g3"), None),
        Err(MoveError::IllegalMove)
    );
    assert_eq!(
        position.validate_move(sq("e2"), sq("e5"), None),
        Err(MoveError::IllegalMove)
    );
    assert_eq!(
        position.validate_move(sq("c1"), sq("e3"), None),
        Err(MoveError::BlockedPath)
    );
    assert_eq!(
        position.validate_move(sq("e2"), sq("e4"), Some(Piece::Queen)),
        Err(MoveError::InvalidPromotion)
    );
    assert!(position.validate_move(sq("g1"), sq("f3"), None).is_ok());
}

#[test]
fn test_pawn_push_onto_piece_is_blocked() {
    let mut position = Position::new();
    play(&mut position, &["e2e4", "e7e5"]);
    assert_eq!(
        position.validate_move(sq("e4"), sq("e5"), None),
        Err(MoveError::BlockedPath)
    );
    assert_eq!(
        position.validate_move(sq("e4"), sq("d5"), None),
        Err(MoveError::IllegalMove)
    );
}

#[test]
fn test_legal_moves_from_opponent_piece_is_empty() {
    let position = Position::new();
    assert!(position.legal_moves_from(sq("e7")).is_empty());
    assert!(position.legal_destinations(Square(9, 9)).is_empty());
    assert_eq!(position.legal_moves_from(sq("g1")).len(), 2);
}

#[test]
fn test_validation_leaves_position_untouched() {
    let position = Position::new();
    let before = position.clone();
    let _ = position.validate_move(sq("e2"), sq("e4"), None);
    let _ = position.validate_move(sq("e1"), sq("e2"), None);
    assert_eq!(position, before);
}
