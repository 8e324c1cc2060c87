//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece. `build` checks that the result
//! is a position a real game could be in.
//!
//! # Example
//! ```
//! use chess_rules::board::{PositionBuilder, Color, Piece, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.legal_moves().len(), 7);
//! ```

use super::movegen::KING_HOME_FILE;
use super::{Board, CastlingRights, Color, Piece, Position, PositionError, Square};

/// A fluent builder for constructing `Position`s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().collect();
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for the fifty-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build and validate the position.
    pub fn build(self) -> Result<Position, PositionError> {
        let mut board = Board::empty();
        for &(square, color, piece) in &self.pieces {
            if !square.is_valid() {
                return Err(PositionError::SquareOutOfBounds { square });
            }
            if piece == Piece::Pawn && (square.0 == 0 || square.0 == 7) {
                return Err(PositionError::PawnOnBackRank { square });
            }
            board.place(square, color, piece);
        }

        for color in Color::BOTH {
            let found = board.count(color, Piece::King);
            if found != 1 {
                return Err(PositionError::KingCount { color, found });
            }
        }

        for color in Color::BOTH {
            for kingside in [true, false] {
                if self.castling_rights.has(color, kingside)
                    && !castling_pieces_home(&board, color, kingside)
                {
                    return Err(PositionError::InvalidCastlingRights { color, kingside });
                }
            }
        }

        if let Some(target) = self.en_passant_target {
            if !en_passant_consistent(&board, target, self.side_to_move) {
                return Err(PositionError::InvalidEnPassant { square: target });
            }
        }

        let waiting = self.side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }

        Ok(Position {
            board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number.max(1),
        })
    }
}

fn castling_pieces_home(board: &Board, color: Color, kingside: bool) -> bool {
    let rank = color.back_rank();
    let rook_file = if kingside { 7 } else { 0 };
    board.piece_at(Square(rank, KING_HOME_FILE)) == Some((color, Piece::King))
        && board.piece_at(Square(rank, rook_file)) == Some((color, Piece::Rook))
}

/// The target must be the empty square a pawn of the side that just moved
/// skipped over, with that pawn directly in front of it and its start square
/// empty.
fn en_passant_consistent(board: &Board, target: Square, side_to_move: Color) -> bool {
    if !target.is_valid() {
        return false;
    }
    let pusher = side_to_move.opponent();
    let expected_rank = (pusher.pawn_start_rank() as isize + pusher.pawn_direction()) as usize;
    if target.0 != expected_rank || !board.is_empty(target) {
        return false;
    }
    let landed = target.offset(pusher.pawn_direction(), 0);
    let start = target.offset(-pusher.pawn_direction(), 0);
    match (landed, start) {
        (Some(landed), Some(start)) => {
            board.piece_at(landed) == Some((pusher, Piece::Pawn)) && board.is_empty(start)
        }
        _ => false,
    }
}
