use super::super::{Color, MoveList, Position, Square};
use super::KNIGHT_OFFSETS;

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        self.generate_step_moves(from, color, &KNIGHT_OFFSETS, moves);
    }
}
