//! A game and its clock behind one lock.
//!
//! Hosts running many games share each `Session` through an `Arc`. Moves,
//! clock ticks and timeouts for one game all go through the same mutex, so
//! a move can never land concurrently with a flag fall.

use std::collections::BTreeSet;
use std::time::Duration;

use parking_lot::Mutex;

use crate::board::{Color, MoveError, Piece, PositionRecord, Square};
use crate::config::GameConfig;
use crate::game::{AppliedMove, Clock, GameState, TerminalStatus};

struct SessionState {
    game: GameState,
    clock: Clock,
}

impl SessionState {
    fn new(config: GameConfig) -> Self {
        SessionState {
            game: GameState::with_config(config),
            clock: Clock::new(config.time_control),
        }
    }
}

pub struct Session {
    inner: Mutex<SessionState>,
}

impl Session {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Session {
            inner: Mutex::new(SessionState::new(config)),
        }
    }

    /// Submit a move on behalf of `player`. On success the mover's clock
    /// receives the increment.
    pub fn submit_move(
        &self,
        player: Color,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<AppliedMove, MoveError> {
        let mut state = self.inner.lock();
        let applied = state.game.submit_move_as(player, from, to, promotion)?;
        state.clock.add_increment(player);
        Ok(applied)
    }

    /// Charge `elapsed` to the side to move. A flag fall ends the game on
    /// time. Ticks after the game is decided are ignored.
    pub fn tick(&self, elapsed: Duration) -> TerminalStatus {
        let mut state = self.inner.lock();
        if state.game.status().is_terminal() {
            return state.game.status();
        }
        let side = state.game.side_to_move();
        match state.clock.tick(side, elapsed) {
            Some(flagged) => state.game.on_time_expired(flagged),
            None => state.game.status(),
        }
    }

    /// Forward an external "time expired" signal.
    pub fn time_expired(&self, color: Color) -> TerminalStatus {
        self.inner.lock().game.on_time_expired(color)
    }

    /// Take back the last move. The clock is left as it is.
    pub fn undo(&self) -> Option<AppliedMove> {
        self.inner.lock().game.undo()
    }

    /// Discard the game and start a fresh one with the same configuration.
    pub fn new_game(&self) {
        let mut state = self.inner.lock();
        let config = *state.game.config();
        *state = SessionState::new(config);
    }

    #[must_use]
    pub fn status(&self) -> TerminalStatus {
        self.inner.lock().game.status()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.inner.lock().game.side_to_move()
    }

    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> BTreeSet<Square> {
        self.inner.lock().game.legal_moves_for(square)
    }

    #[must_use]
    pub fn remaining(&self, color: Color) -> Duration {
        self.inner.lock().clock.remaining(color)
    }

    /// Remaining time for `color` as `m:ss`.
    #[must_use]
    pub fn format_remaining(&self, color: Color) -> String {
        self.inner.lock().clock.format_remaining(color)
    }

    /// Snapshot of the current position for saving.
    #[must_use]
    pub fn record(&self) -> PositionRecord {
        self.inner.lock().game.position_record()
    }

    /// Run `f` with shared access to the game, holding the lock throughout.
    pub fn with_game<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.inner.lock().game)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(GameConfig::default())
    }
}
