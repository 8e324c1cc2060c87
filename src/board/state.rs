use std::fmt;

use super::{Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid of optional pieces.
///
/// `Board` is pure data: placing, removing and moving pieces is unconditional
/// and never checks chess legality. Passing an off-board square is a caller
/// bug and panics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// The standard starting arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.place(Square(0, file), Color::White, *piece);
            board.place(Square(7, file), Color::Black, *piece);
            board.place(Square(1, file), Color::White, Piece::Pawn);
            board.place(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[track_caller]
    fn check_square(sq: Square) {
        assert!(
            sq.is_valid(),
            "square ({}, {}) is off the board",
            sq.0,
            sq.1
        );
    }

    #[inline]
    #[must_use]
    #[track_caller]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Self::check_square(sq);
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece type on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Put a piece on a square, returning whatever stood there.
    #[track_caller]
    pub fn place(&mut self, sq: Square, color: Color, piece: Piece) -> Option<(Color, Piece)> {
        Self::check_square(sq);
        self.squares[sq.0][sq.1].replace((color, piece))
    }

    #[track_caller]
    pub fn remove(&mut self, sq: Square) -> Option<(Color, Piece)> {
        Self::check_square(sq);
        self.squares[sq.0][sq.1].take()
    }

    /// Move the contents of `from` onto `to`, returning what `to` held.
    ///
    /// Unconditional: an empty `from` leaves `to` empty as well.
    #[track_caller]
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<(Color, Piece)> {
        let moving = self.remove(from);
        Self::check_square(to);
        std::mem::replace(&mut self.squares[to.0][to.1], moving)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Every occupied square with its piece, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.squares[sq.0][sq.1].map(|(color, piece)| (sq, color, piece))
        })
    }

    /// Squares holding pieces of one color
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, c, _)| c == color)
            .map(|(sq, _, _)| sq)
    }

    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces()
            .filter(|&(_, c, p)| c == color && p == piece)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let c = match self.squares[rank][file] {
                    Some((color, piece)) => piece.symbol(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_arrangement() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.count(Color::Black, Piece::Pawn), 8);
        assert!(board.is_empty(Square(4, 4)));
    }

    #[test]
    fn test_place_remove_move() {
        let mut board = Board::empty();
        assert_eq!(board.place(Square(3, 3), Color::White, Piece::Knight), None);
        assert_eq!(board.color_on(Square(3, 3)), Some(Color::White));

        board.place(Square(5, 4), Color::Black, Piece::Rook);
        let captured = board.move_piece(Square(3, 3), Square(5, 4));
        assert_eq!(captured, Some((Color::Black, Piece::Rook)));
        assert!(board.is_empty(Square(3, 3)));
        assert_eq!(board.piece_on(Square(5, 4)), Some(Piece::Knight));

        assert_eq!(board.remove(Square(5, 4)), Some((Color::White, Piece::Knight)));
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn test_find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::White), Some(Square(0, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square(7, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_off_board_square_panics() {
        let board = Board::new();
        let _ = board.piece_at(Square(8, 0));
    }

    #[test]
    fn test_display_diagram() {
        let text = Board::new().to_string();
        assert!(text.contains("8 | r n b q k b n r |"));
        assert!(text.contains("1 | R N B Q K B N R |"));
    }
}
