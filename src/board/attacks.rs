//! Attack detection.
//!
//! A square is attacked when some piece could capture onto it by its movement
//! rules, kings included. Pins are ignored: a pinned piece still gives check.

use super::{Board, Color, Piece, Square};

/// Whether `piece` could travel from `from` to `to` on an otherwise empty
/// board. Pawns are judged by their capture pattern.
#[must_use]
pub(crate) fn attack_shape(piece: Piece, color: Color, from: Square, to: Square) -> bool {
    let dr = to.0 as isize - from.0 as isize;
    let df = to.1 as isize - from.1 as isize;
    if dr == 0 && df == 0 {
        return false;
    }
    match piece {
        Piece::Pawn => dr == color.pawn_direction() && df.abs() == 1,
        Piece::Knight => matches!((dr.abs(), df.abs()), (1, 2) | (2, 1)),
        Piece::King => dr.abs() <= 1 && df.abs() <= 1,
        Piece::Bishop => dr.abs() == df.abs(),
        Piece::Rook => dr == 0 || df == 0,
        Piece::Queen => dr == 0 || df == 0 || dr.abs() == df.abs(),
    }
}

impl Board {
    /// Whether the given piece standing on `from` attacks `target`.
    #[must_use]
    pub fn piece_attacks(&self, from: Square, color: Color, piece: Piece, target: Square) -> bool {
        if !attack_shape(piece, color, from, target) {
            return false;
        }
        !piece.is_slider() || self.is_path_clear(from, target)
    }

    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        self.pieces()
            .any(|(from, color, piece)| {
                color == attacker_color && self.piece_attacks(from, color, piece, square)
            })
    }

    /// Squares of `attacker_color` pieces attacking `square`
    #[must_use]
    pub fn attackers_of(&self, square: Square, attacker_color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|&(from, color, piece)| {
                color == attacker_color && self.piece_attacks(from, color, piece, square)
            })
            .map(|(from, _, _)| from)
            .collect()
    }

    /// A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_attacks_diagonally_forward() {
        let mut board = Board::empty();
        board.place(Square(3, 3), Color::White, Piece::Pawn);
        assert!(board.is_square_attacked(Square(4, 2), Color::White));
        assert!(board.is_square_attacked(Square(4, 4), Color::White));
        assert!(!board.is_square_attacked(Square(4, 3), Color::White));
        assert!(!board.is_square_attacked(Square(2, 2), Color::White));
    }

    #[test]
    fn test_slider_blocked() {
        let mut board = Board::empty();
        board.place(Square(0, 0), Color::Black, Piece::Rook);
        board.place(Square(0, 3), Color::White, Piece::Knight);
        assert!(board.is_square_attacked(Square(0, 3), Color::Black));
        assert!(!board.is_square_attacked(Square(0, 5), Color::Black));
        assert!(board.is_square_attacked(Square(5, 0), Color::Black));
    }

    #[test]
    fn test_knight_and_king_reach() {
        let mut board = Board::empty();
        board.place(Square(4, 4), Color::Black, Piece::Knight);
        board.place(Square(0, 0), Color::White, Piece::King);
        assert!(board.is_square_attacked(Square(2, 3), Color::Black));
        assert!(!board.is_square_attacked(Square(3, 3), Color::Black));
        assert!(board.is_square_attacked(Square(1, 1), Color::White));
        assert!(!board.is_square_attacked(Square(2, 2), Color::White));
    }

    #[test]
    fn test_is_in_check_and_attackers() {
        let mut board = Board::empty();
        board.place(Square(0, 4), Color::White, Piece::King);
        board.place(Square(7, 4), Color::Black, Piece::Rook);
        board.place(Square(3, 1), Color::Black, Piece::Bishop);
        assert!(board.is_in_check(Color::White));
        let mut attackers = board.attackers_of(Square(0, 4), Color::Black);
        attackers.sort();
        assert_eq!(attackers, vec![Square(3, 1), Square(7, 4)]);
        assert!(!board.is_in_check(Color::Black));
    }
}
