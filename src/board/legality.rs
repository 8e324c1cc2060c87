//! Legal move filtering and move validation.
//!
//! Geometric candidates from the move generator are kept only when the
//! mover's king is safe afterwards, checked on a scratch copy of the
//! position. Castling additionally needs the king's start and transit squares
//! to be unattacked.

use std::collections::BTreeSet;

use super::attacks::attack_shape;
use super::movegen::KING_HOME_FILE;
use super::{Color, Move, MoveError, MoveList, Piece, Position, Square};

impl Position {
    /// Whether `color`'s king is attacked in this position.
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Whether the side to move is in check.
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// King start and transit squares must be safe before castling.
    fn castling_path_safe(&self, mv: Move) -> bool {
        let opponent = self.side_to_move.opponent();
        let rank = mv.from().0;
        let transit = Square(rank, (mv.from().1 + mv.to().1) / 2);
        !self.board.is_square_attacked(mv.from(), opponent)
            && !self.board.is_square_attacked(transit, opponent)
    }

    /// The mover's king is not attacked once `mv` is played.
    fn keeps_king_safe(&self, mv: Move) -> bool {
        let color = self.side_to_move;
        let mut scratch = self.clone();
        scratch.make_move(mv);
        !scratch.board.is_in_check(color)
    }

    fn is_legal_candidate(&self, mv: Move) -> bool {
        (!mv.is_castling() || self.castling_path_safe(mv)) && self.keeps_king_safe(mv)
    }

    /// Whether a move produced by the move generator is legal here.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.color_on(mv.from()) == Some(self.side_to_move)
            && self.pseudo_moves_from(mv.from()).contains(&mv)
            && self.is_legal_candidate(mv)
    }

    /// All legal moves for the side to move. Promotions appear once per
    /// promotion piece.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.pseudo_moves();
        moves.retain(|mv| self.is_legal_candidate(*mv));
        moves
    }

    /// Legal moves of the piece on `from`; empty unless it belongs to the
    /// side to move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        if !from.is_valid() || self.board.color_on(from) != Some(self.side_to_move) {
            return MoveList::new();
        }
        let mut moves = self.pseudo_moves_from(from);
        moves.retain(|mv| self.is_legal_candidate(*mv));
        moves
    }

    /// Destination squares of `legal_moves_from`, for move hinting.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> BTreeSet<Square> {
        self.legal_moves_from(from).iter().map(|mv| mv.to()).collect()
    }

    /// Stops at the first legal move found.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.board.squares_of(self.side_to_move).any(|from| {
            self.pseudo_moves_from(from)
                .iter()
                .any(|mv| self.is_legal_candidate(*mv))
        })
    }

    /// Turn a `(from, to, promotion)` intent into a legal move, or say why it
    /// is not one. The position is never modified.
    pub fn validate_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(MoveError::OutOfBounds);
        }
        let (color, piece) = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtOrigin)?;
        if color != self.side_to_move {
            return Err(MoveError::WrongColorPiece);
        }
        if from == to {
            return Err(MoveError::IllegalMove);
        }
        if self.board.color_on(to) == Some(color) {
            return Err(MoveError::DestinationOccupied);
        }

        let candidates: Vec<Move> = self
            .pseudo_moves_from(from)
            .into_iter()
            .filter(|mv| mv.to() == to)
            .collect();
        let Some(&first) = candidates.first() else {
            return Err(self.classify_unreachable(from, to, color, piece));
        };

        if first.is_castling() && !self.castling_path_safe(first) {
            return Err(MoveError::CastlingThroughCheck);
        }
        if !self.keeps_king_safe(first) {
            return Err(if first.is_castling() {
                MoveError::CastlingThroughCheck
            } else {
                MoveError::LeavesKingInCheck
            });
        }

        if first.is_promotion() {
            let choice = promotion.ok_or(MoveError::MissingPromotionChoice)?;
            candidates
                .into_iter()
                .find(|mv| mv.promotion() == Some(choice))
                .ok_or(MoveError::InvalidPromotion)
        } else if promotion.is_some() {
            Err(MoveError::InvalidPromotion)
        } else {
            Ok(first)
        }
    }

    /// Reason tag for a destination the move generator did not produce.
    fn classify_unreachable(&self, from: Square, to: Square, color: Color, piece: Piece) -> MoveError {
        let dr = to.0 as isize - from.0 as isize;
        let df = to.1 as isize - from.1 as isize;
        match piece {
            Piece::Pawn => {
                let dir = color.pawn_direction();
                let single = dr == dir;
                let double = dr == 2 * dir && from.0 == color.pawn_start_rank();
                if df == 0 && (single || double) {
                    MoveError::BlockedPath
                } else {
                    MoveError::IllegalMove
                }
            }
            Piece::King => {
                let rank = color.back_rank();
                let castling_shape =
                    from == Square(rank, KING_HOME_FILE) && dr == 0 && df.abs() == 2;
                if !castling_shape {
                    return MoveError::IllegalMove;
                }
                let kingside = df > 0;
                let rook_sq = Square(rank, if kingside { 7 } else { 0 });
                if self.castling_rights.has(color, kingside)
                    && self.board.piece_at(rook_sq) == Some((color, Piece::Rook))
                {
                    MoveError::BlockedPath
                } else {
                    MoveError::IllegalMove
                }
            }
            Piece::Knight => MoveError::IllegalMove,
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                if attack_shape(piece, color, from, to) {
                    MoveError::BlockedPath
                } else {
                    MoveError::IllegalMove
                }
            }
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut scratch = self.clone();
        let mut nodes = 0;
        for m in moves {
            let info = scratch.make_move(m);
            nodes += scratch.perft(depth - 1);
            scratch.unmake_move(m, info);
        }
        nodes
    }
}
