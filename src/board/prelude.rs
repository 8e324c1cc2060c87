//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used board types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    parse_coordinate_move, Board, CastlingRights, Color, Move, MoveError, MoveList, Piece,
    Position, PositionBuilder, PositionRecord, Square,
};
