use super::super::{Color, Move, MoveList, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.board.is_empty(forward_sq) {
                if forward_sq.0 == promotion_rank {
                    push_promotions(Move::quiet(from, forward_sq), moves);
                } else {
                    moves.push(Move::quiet(from, forward_sq));
                    if from.0 == color.pawn_start_rank() {
                        if let Some(double_sq) = from.offset(2 * dir, 0) {
                            if self.board.is_empty(double_sq) {
                                moves.push(Move::double_pawn_push(from, double_sq));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.board.color_on(target_sq) {
                Some(target_color) if target_color != color => {
                    let capture = Move::capture(from, target_sq);
                    if target_sq.0 == promotion_rank {
                        push_promotions(capture, moves);
                    } else {
                        moves.push(capture);
                    }
                }
                Some(_) => {}
                None => {
                    // The target is only ever valid for the side to move.
                    if Some(target_sq) == self.en_passant_target && color == self.side_to_move {
                        moves.push(Move::en_passant(from, target_sq));
                    }
                }
            }
        }
    }
}

fn push_promotions(base: Move, moves: &mut MoveList) {
    for promo in PROMOTION_PIECES {
        moves.push(base.with_promotion(promo));
    }
}
