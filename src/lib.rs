//! Chess rules engine.
//!
//! Decides whether a proposed move is legal, applies it, and detects the end
//! of the game: checkmate, stalemate, the fifty-move rule, repetition and
//! timeouts. Rendering and input handling are left to the caller, which
//! forwards `(from, to, promotion)` intents and renders the results.

pub mod board;
pub mod config;
pub mod game;
pub mod session;
mod zobrist;

pub use board::{Color, Move, MoveError, Piece, Position, Square};
pub use config::{ConfigError, GameConfig, TimeControl};
pub use game::{AppliedMove, Clock, GameState, TerminalStatus};
pub use session::Session;
