//! Coordinate notation for move intents ("e2e4", "e7e8q").

use super::{MoveParseError, Piece, Square};

/// Parse a coordinate move into `(from, to, promotion)`.
///
/// Only the notation is checked here; whether the move is legal is up to
/// `Position::validate_move`.
///
/// # Example
/// ```
/// use chess_rules::board::{parse_coordinate_move, Piece, Square};
///
/// let (from, to, promotion) = parse_coordinate_move("e7e8q").unwrap();
/// assert_eq!(from, Square(6, 4));
/// assert_eq!(to, Square(7, 4));
/// assert_eq!(promotion, Some(Piece::Queen));
/// ```
pub fn parse_coordinate_move(
    notation: &str,
) -> Result<(Square, Square, Option<Piece>), MoveParseError> {
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() < 4 || chars.len() > 5 {
        return Err(MoveParseError::InvalidLength { len: chars.len() });
    }

    let invalid_square = || MoveParseError::InvalidSquare {
        notation: notation.to_string(),
    };
    let from: Square = chars[0..2]
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| invalid_square())?;
    let to: Square = chars[2..4]
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| invalid_square())?;

    let promotion = match chars.get(4) {
        Some(&c) => match Piece::from_char(c) {
            Some(piece) if piece.is_promotion_choice() => Some(piece),
            _ => return Err(MoveParseError::InvalidPromotion { char: c }),
        },
        None => None,
    };

    Ok((from, to, promotion))
}
