use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Where a game stands. Every variant but `InProgress` is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerminalStatus {
    #[default]
    InProgress,
    /// The side to move has no legal move and is in check; holds the winner.
    Checkmate(Color),
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMove,
    /// A clock reached zero; holds the winner.
    Timeout(Color),
}

impl TerminalStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, TerminalStatus::InProgress)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            TerminalStatus::Checkmate(color) | TerminalStatus::Timeout(color) => Some(color),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            TerminalStatus::Stalemate
                | TerminalStatus::DrawByRepetition
                | TerminalStatus::DrawByFiftyMove
        )
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalStatus::InProgress => f.write_str("in progress"),
            TerminalStatus::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
            TerminalStatus::Stalemate => f.write_str("draw by stalemate"),
            TerminalStatus::DrawByRepetition => f.write_str("draw by repetition"),
            TerminalStatus::DrawByFiftyMove => f.write_str("draw by fifty-move rule"),
            TerminalStatus::Timeout(winner) => write!(f, "time forfeit, {winner} wins"),
        }
    }
}
