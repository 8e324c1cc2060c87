//! Chess board representation and move rules.
//!
//! A `Board` is the bare 8x8 grid. A `Position` adds side to move, castling
//! rights, en passant target and move counters, and knows how to generate,
//! validate and apply moves.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Square};
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert!(position.legal_moves_from(Square(0, 0)).is_empty());
//! ```

mod attacks;
mod builder;
mod error;
pub(crate) mod history;
mod legality;
mod make_unmake;
mod movegen;
mod notation;
mod position;
pub mod prelude;
mod record;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{MoveError, MoveParseError, PositionError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use notation::parse_coordinate_move;
pub use position::Position;
pub use record::PositionRecord;
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveKind, MoveList, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
