//! Plain-data snapshot of a position for save/resume.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Position, PositionBuilder, PositionError, Square};

/// Everything needed to resume a game from a position: the 64-square
/// occupancy (index `rank * 8 + file`), side to move, castling rights,
/// en passant target and both move counters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionRecord {
    pub squares: Vec<Option<(Color, Piece)>>,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl PositionRecord {
    /// Record of the standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        Position::new().to_record()
    }
}

impl Default for PositionRecord {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    #[must_use]
    pub fn to_record(&self) -> PositionRecord {
        PositionRecord {
            squares: Square::all().map(|sq| self.board.piece_at(sq)).collect(),
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    /// Rebuild a position from a record, applying the same validation as
    /// `PositionBuilder::build`.
    pub fn from_record(record: &PositionRecord) -> Result<Position, PositionError> {
        if record.squares.len() != 64 {
            return Err(PositionError::WrongSquareCount {
                found: record.squares.len(),
            });
        }

        let mut builder = PositionBuilder::new()
            .side_to_move(record.side_to_move)
            .castling(record.castling_rights)
            .halfmove_clock(record.halfmove_clock)
            .fullmove_number(record.fullmove_number);
        if let Some(target) = record.en_passant_target {
            builder = builder.en_passant(target);
        }
        for (idx, slot) in record.squares.iter().enumerate() {
            if let Some((color, piece)) = *slot {
                builder = builder.piece(Square::from_index(idx), color, piece);
            }
        }
        builder.build()
    }
}

impl TryFrom<&PositionRecord> for Position {
    type Error = PositionError;

    fn try_from(record: &PositionRecord) -> Result<Self, Self::Error> {
        Position::from_record(record)
    }
}

impl From<&Position> for PositionRecord {
    fn from(position: &Position) -> Self {
        position.to_record()
    }
}
