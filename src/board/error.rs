//! Error types for board and move operations.

use std::fmt;

use super::types::{Color, Square};

/// Why a submitted move was rejected.
///
/// Rejections are routine: the position is left untouched and the caller is
/// expected to re-prompt. `GameOver` is kept separate from the legality tags
/// so a caller can tell "illegal move" from "game already decided".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Origin or destination is not on the board
    OutOfBounds,
    /// There is no piece on the origin square
    NoPieceAtOrigin,
    /// The piece on the origin square belongs to the side not to move
    WrongColorPiece,
    /// The submitting player is not the side to move
    NotYourTurn,
    /// The piece cannot reach the destination by its movement rules
    IllegalMove,
    /// The destination holds a piece of the mover's own color
    DestinationOccupied,
    /// A piece stands between origin and destination
    BlockedPath,
    /// The move would leave the mover's king attacked
    LeavesKingInCheck,
    /// Castling out of, through, or into an attacked square
    CastlingThroughCheck,
    /// A pawn reaching the last rank needs a promotion piece
    MissingPromotionChoice,
    /// A promotion piece was given where none is allowed, or is not Q/R/B/N
    InvalidPromotion,
    /// The game already has a terminal status
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveError::OutOfBounds => "square is off the board",
            MoveError::NoPieceAtOrigin => "no piece on the origin square",
            MoveError::WrongColorPiece => "that piece belongs to the opponent",
            MoveError::NotYourTurn => "it is not your turn",
            MoveError::IllegalMove => "the piece cannot move that way",
            MoveError::DestinationOccupied => "destination holds one of your own pieces",
            MoveError::BlockedPath => "the path is blocked",
            MoveError::LeavesKingInCheck => "move would leave the king in check",
            MoveError::CastlingThroughCheck => "cannot castle out of, through, or into check",
            MoveError::MissingPromotionChoice => "a promotion piece must be chosen",
            MoveError::InvalidPromotion => "invalid promotion choice",
            MoveError::GameOver => "the game is over",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for building or restoring an invalid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A position record must hold exactly 64 squares
    WrongSquareCount { found: usize },
    /// A square outside the board was used
    SquareOutOfBounds { square: Square },
    /// Each color needs exactly one king
    KingCount { color: Color, found: usize },
    /// Pawns cannot stand on the first or last rank
    PawnOnBackRank { square: Square },
    /// A castling right was given without king and rook on their home squares
    InvalidCastlingRights { color: Color, kingside: bool },
    /// The en passant target does not follow a double pawn push
    InvalidEnPassant { square: Square },
    /// The side that just moved would still be in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::WrongSquareCount { found } => {
                write!(f, "Position must have 64 squares, found {found}")
            }
            PositionError::SquareOutOfBounds { square } => {
                write!(f, "Square ({}, {}) is off the board", square.0, square.1)
            }
            PositionError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            PositionError::InvalidCastlingRights { color, kingside } => {
                let side = if *kingside { "kingside" } else { "queenside" };
                write!(f, "{color} cannot hold {side} castling rights")
            }
            PositionError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant square '{square}'")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not to move")
            }
        }
    }
}

impl std::error::Error for PositionError {}
