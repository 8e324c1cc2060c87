//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Geometric move generation per piece
//! - `legality.rs` - Self-check filtering and move validation
//! - `edge_cases.rs` - Castling, en passant and promotion
//! - `draw.rs` - Mate, stalemate, fifty-move and repetition detection
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `perft.rs` - Node counts for the standard test positions
//! - `proptest.rs` - Property-based tests

mod draw;
mod legality;

use crate::board::{parse_coordinate_move, Color, Move, Piece, Position, PositionBuilder, Square};

/// Square from algebraic notation, e.g. `sq("e4")`.
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Builder holding the pieces of an ASCII diagram. Rows run from rank 8
/// down to rank 1, one character per file: `.` for empty, uppercase for
/// White, lowercase for Black.
pub(super) fn diagram(rows: [&str; 8]) -> PositionBuilder {
    let mut builder = PositionBuilder::new();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "diagram row {row} must have 8 squares");
        for (file, c) in line.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square(7 - row, file), color, piece);
        }
    }
    builder
}

/// The legal move matching coordinate notation such as `e7e8q`.
pub(super) fn find_move(position: &Position, notation: &str) -> Move {
    let (from, to, promotion) = parse_coordinate_move(notation).expect("coordinate notation");
    position
        .validate_move(from, to, promotion)
        .unwrap_or_else(|err| panic!("{notation} should be legal: {err}"))
}

/// Play a sequence of coordinate moves on `position`.
pub(super) fn play(position: &mut Position, moves: &[&str]) {
    for notation in moves {
        let mv = find_move(position, notation);
        position.make_move(mv);
    }
}
