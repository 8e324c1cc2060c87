//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
