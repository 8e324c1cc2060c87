use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{Board, CastlingRights, Color, Piece, Square};

/// A complete position: the grid plus everything else that decides which
/// moves are legal and when a draw may be claimed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Standard starting position, White to move, full castling rights.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant on this move, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Half-moves since the last pawn move or capture
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// True when the side to move has a legal en passant capture, so the
    /// en passant target actually matters.
    #[must_use]
    pub fn en_passant_available(&self) -> bool {
        let Some(target) = self.en_passant_target else {
            return false;
        };
        let color = self.side_to_move;
        let behind = -color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|df| target.offset(behind, df))
            .filter(|&sq| self.board.piece_at(sq) == Some((color, Piece::Pawn)))
            .any(|sq| self.legal_moves_from(sq).iter().any(|mv| mv.is_en_passant()))
    }

    /// Key identifying the position for repetition purposes.
    #[must_use]
    pub fn zobrist_key(&self) -> u64 {
        let mut hash = 0;
        for (sq, color, piece) in self.board.pieces() {
            hash ^= ZOBRIST.piece(sq, color, piece);
        }
        hash ^= ZOBRIST.side(self.side_to_move);
        hash ^= ZOBRIST.castling(self.castling_rights);
        if self.en_passant_available() {
            if let Some(target) = self.en_passant_target {
                hash ^= ZOBRIST.en_passant(target);
            }
        }
        hash
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} to move, castling {}, en passant {}, halfmove {}, move {}",
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target
                .map_or_else(|| "-".to_string(), |sq| sq.to_string()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
