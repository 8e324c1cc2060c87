use super::super::{Board, Color, MoveList, Position, Square};

impl Board {
    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// The walk steps one rank/file at a time along the sign of the delta, so
    /// it serves rooks, bishops and queens alike. Squares that share no
    /// rank, file or diagonal have no path and return false.
    #[must_use]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let dr = to.0 as isize - from.0 as isize;
        let df = to.1 as isize - from.1 as isize;
        if (dr == 0 && df == 0) || (dr != 0 && df != 0 && dr.abs() != df.abs()) {
            return false;
        }

        let (step_r, step_f) = (dr.signum(), df.signum());
        let mut current = from;
        loop {
            current = match current.offset(step_r, step_f) {
                Some(sq) => sq,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}

impl Position {
    /// Walk each direction until the edge or the first occupied square; that
    /// square is included only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.board.color_on(to) {
                    None => moves.push(self.create_move(from, to)),
                    Some(occupant) => {
                        if occupant != color {
                            moves.push(self.create_move(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
