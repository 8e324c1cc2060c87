use super::{Color, Move, MoveKind, Piece, Position, Square};

/// Everything `make_move` overwrites, so `unmake_move` can restore it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: super::CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UnmakeInfo {
    /// The piece this move removed from the board, if any
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured_piece_info
    }
}

/// Rook origin and destination files for a castling move.
#[inline]
pub(crate) const fn castling_rook_files(kingside: bool) -> (usize, usize) {
    if kingside {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// The square of the pawn removed by an en passant capture landing on `to`.
#[inline]
pub(crate) fn en_passant_victim(to: Square, mover: Color) -> Square {
    let rank = (to.0 as isize - mover.pawn_direction()) as usize;
    Square(rank, to.1)
}

impl Position {
    /// Apply a move without checking legality. The move must come from this
    /// position's move generator (or `validate_move`).
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let info = UnmakeInfo {
            captured_piece_info: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let (_, moving_piece) = self
            .board
            .piece_at(m.from())
            .expect("make_move 'from' empty");

        let captured_piece_info = match m.kind() {
            MoveKind::EnPassant => self.board.remove(en_passant_victim(m.to(), color)),
            MoveKind::CastleKingside | MoveKind::CastleQueenside => None,
            _ => self.board.remove(m.to()),
        };

        self.board.move_piece(m.from(), m.to());
        if let Some(promoted) = m.promotion() {
            self.board.place(m.to(), color, promoted);
        }

        if m.is_castling() {
            let (rook_from_f, rook_to_f) =
                castling_rook_files(m.kind() == MoveKind::CastleKingside);
            let rank = m.to().0;
            self.board
                .move_piece(Square(rank, rook_from_f), Square(rank, rook_to_f));
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from().0 + m.to().0) / 2, m.from().1))
        } else {
            None
        };

        if moving_piece == Piece::Pawn || captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if moving_piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        // Anything leaving or landing on a home corner ends that corner's right.
        for sq in [m.from(), m.to()] {
            for owner in Color::BOTH {
                let rank = owner.back_rank();
                if sq == Square(rank, 0) {
                    self.castling_rights.remove(owner, false);
                } else if sq == Square(rank, 7) {
                    self.castling_rights.remove(owner, true);
                }
            }
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        UnmakeInfo {
            captured_piece_info,
            ..info
        }
    }

    /// Exact inverse of `make_move` given the info it returned.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let color = self.side_to_move;

        if m.is_castling() {
            let (rook_orig_f, rook_moved_f) =
                castling_rook_files(m.kind() == MoveKind::CastleKingside);
            let rank = m.to().0;
            self.board
                .move_piece(Square(rank, rook_moved_f), Square(rank, rook_orig_f));
        }

        self.board.move_piece(m.to(), m.from());
        if m.promotion().is_some() {
            self.board.place(m.from(), color, Piece::Pawn);
        }

        if let Some((cap_col, cap_piece)) = info.captured_piece_info {
            let sq = if m.is_en_passant() {
                en_passant_victim(m.to(), color)
            } else {
                m.to()
            };
            self.board.place(sq, cap_col, cap_piece);
        }
    }
}
