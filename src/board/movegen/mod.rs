//! Geometric move generation.
//!
//! Produces every square a piece can reach by its movement rules on the
//! current board, including captures, double pushes, en passant and castling
//! candidates. Whether the mover's king ends up attacked is left to the
//! legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::KING_HOME_FILE;

use super::{Color, Move, MoveList, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = KING_OFFSETS;

impl Position {
    /// Geometric moves for the piece on `from`, whichever color it is.
    ///
    /// Returns an empty list for an empty square.
    #[must_use]
    pub fn pseudo_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        let Some((color, piece)) = self.board.piece_at(from) else {
            return moves;
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
            Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
            Piece::Bishop => self.generate_slider_moves(from, color, &BISHOP_DIRECTIONS, &mut moves),
            Piece::Rook => self.generate_slider_moves(from, color, &ROOK_DIRECTIONS, &mut moves),
            Piece::Queen => self.generate_slider_moves(from, color, &QUEEN_DIRECTIONS, &mut moves),
            Piece::King => self.generate_king_moves(from, color, &mut moves),
        }
        moves
    }

    /// Geometric moves for every piece of the side to move.
    #[must_use]
    pub fn pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.board.squares_of(self.side_to_move) {
            moves.extend(self.pseudo_moves_from(from));
        }
        moves
    }

    /// Quiet move or capture depending on what stands on `to`.
    fn create_move(&self, from: Square, to: Square) -> Move {
        if self.board.is_empty(to) {
            Move::quiet(from, to)
        } else {
            Move::capture(from, to)
        }
    }

    /// Push single-step moves from `offsets` that land on an empty square or
    /// an enemy piece.
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if self.board.color_on(to) != Some(color) {
                moves.push(self.create_move(from, to));
            }
        }
    }
}
