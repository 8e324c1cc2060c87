//! Zobrist keys for repetition detection.
//!
//! Two positions with the same pieces, side to move, castling rights and
//! en passant availability share a key.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index] (only file matters for EP target)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // fixed seed keeps keys stable across runs
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, sq: Square, color: Color, piece: Piece) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.as_index()]
    }

    #[inline]
    pub(crate) fn side(&self, side_to_move: Color) -> u64 {
        match side_to_move {
            Color::White => 0,
            Color::Black => self.black_to_move_key,
        }
    }

    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut hash = 0;
        for color in Color::BOTH {
            if rights.has(color, true) {
                hash ^= self.castling_keys[color.index()][0];
            }
            if rights.has(color, false) {
                hash ^= self.castling_keys[color.index()][1];
            }
        }
        hash
    }

    #[inline]
    pub(crate) fn en_passant(&self, target: Square) -> u64 {
        self.en_passant_keys[target.file()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        let a = ZOBRIST.piece(Square(0, 0), Color::White, Piece::Rook);
        let b = ZOBRIST.piece(Square(0, 0), Color::Black, Piece::Rook);
        let c = ZOBRIST.piece(Square(0, 1), Color::White, Piece::Rook);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(ZOBRIST.side(Color::Black), 0);
        assert_eq!(ZOBRIST.side(Color::White), 0);
    }

    #[test]
    fn test_castling_key_composes() {
        let mut white_only = CastlingRights::none();
        white_only.set(Color::White, true);
        white_only.set(Color::White, false);
        let mut black_only = CastlingRights::none();
        black_only.set(Color::Black, true);
        black_only.set(Color::Black, false);
        assert_eq!(
            ZOBRIST.castling(CastlingRights::all()),
            ZOBRIST.castling(white_only) ^ ZOBRIST.castling(black_only)
        );
        assert_eq!(ZOBRIST.castling(CastlingRights::none()), 0);
    }
}
