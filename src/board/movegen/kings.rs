use super::super::{Color, Move, MoveList, Piece, Position, Square};
use super::KING_OFFSETS;

/// File the king starts on, for both colors.
pub(crate) const KING_HOME_FILE: usize = 4;

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_step_moves(from, color, &KING_OFFSETS, moves);

        let back_rank = color.back_rank();
        if from != Square(back_rank, KING_HOME_FILE) {
            return;
        }
        if self.can_castle_geometrically(color, true) {
            moves.push(Move::castle_kingside(from, Square(back_rank, 6)));
        }
        if self.can_castle_geometrically(color, false) {
            moves.push(Move::castle_queenside(from, Square(back_rank, 2)));
        }
    }

    /// Right still held, rook on its corner and every square between king
    /// and rook empty. Attacked squares are the legality filter's concern.
    pub(crate) fn can_castle_geometrically(&self, color: Color, kingside: bool) -> bool {
        let rank = color.back_rank();
        let rook_file = if kingside { 7 } else { 0 };
        if !self.castling_rights.has(color, kingside)
            || self.board.piece_at(Square(rank, KING_HOME_FILE)) != Some((color, Piece::King))
            || self.board.piece_at(Square(rank, rook_file)) != Some((color, Piece::Rook))
        {
            return false;
        }
        let between = if kingside { 5..7 } else { 1..4 };
        between.into_iter().all(|file| self.board.is_empty(Square(rank, file)))
    }
}
