use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::history::RepetitionTable;
use crate::board::{
    Color, Move, MoveError, MoveList, Piece, Position, PositionError, PositionRecord, Square,
    UnmakeInfo,
};
use crate::config::GameConfig;

use super::TerminalStatus;

/// Outcome of an accepted move, for the caller to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedMove {
    pub mv: Move,
    pub color: Color,
    pub piece: Piece,
    /// Piece kind removed from the board, including an en passant victim
    pub captured: Option<Piece>,
    pub gives_check: bool,
    /// Status of the game after the move
    pub status: TerminalStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HistoryEntry {
    applied: AppliedMove,
    undo: UnmakeInfo,
    previous_status: TerminalStatus,
    /// Repetition key of the position the move produced
    key: u64,
}

/// A single game: the current position, its status, and every move played
/// so far with enough information to take it back.
///
/// # Example
/// ```
/// use chess_rules::{GameState, TerminalStatus};
/// use chess_rules::board::{Color, Square};
///
/// let mut game = GameState::new();
/// for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
///     let from: Square = from.parse().unwrap();
///     let to: Square = to.parse().unwrap();
///     game.submit_move(from, to, None).unwrap();
/// }
/// assert_eq!(game.status(), TerminalStatus::Checkmate(Color::Black));
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    initial: Position,
    position: Position,
    status: TerminalStatus,
    history: Vec<HistoryEntry>,
    repetitions: RepetitionTable,
    config: GameConfig,
}

impl GameState {
    /// Standard starting position with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn new_game() -> Self {
        Self::new()
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_position_with_config(Position::new(), config)
    }

    /// Start from an arbitrary position. The status is evaluated right away,
    /// so a position without legal moves starts out decided.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self::from_position_with_config(position, GameConfig::default())
    }

    #[must_use]
    pub fn from_position_with_config(position: Position, config: GameConfig) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.record(position.zobrist_key());
        let mut game = GameState {
            initial: position.clone(),
            position,
            status: TerminalStatus::InProgress,
            history: Vec::new(),
            repetitions,
            config,
        };
        game.status = game.evaluate_status();
        game
    }

    /// Resume from a saved position record.
    pub fn from_record(record: &PositionRecord) -> Result<Self, PositionError> {
        Ok(Self::from_position(Position::from_record(record)?))
    }

    /// Play `moves` from `initial`, stopping at the first rejected move.
    pub fn replay(initial: Position, moves: &[Move], config: GameConfig) -> Result<Self, MoveError> {
        let mut game = Self::from_position_with_config(initial, config);
        for mv in moves {
            game.submit_move(mv.from(), mv.to(), mv.promotion())?;
        }
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> TerminalStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The position the game started from.
    #[inline]
    #[must_use]
    pub fn initial_position(&self) -> &Position {
        &self.initial
    }

    #[must_use]
    pub fn position_record(&self) -> PositionRecord {
        self.position.to_record()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.position.in_check()
    }

    /// How many times the current position has occurred in this game.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.count(self.position.zobrist_key())
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &AppliedMove> + '_ {
        self.history.iter().map(|entry| &entry.applied)
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Validate and play a move for the side to move.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<AppliedMove, MoveError> {
        if self.status.is_terminal() {
            return Err(self.reject(from, to, MoveError::GameOver));
        }
        let mv = self
            .position
            .validate_move(from, to, promotion)
            .map_err(|err| self.reject(from, to, err))?;
        Ok(self.apply(mv))
    }

    /// Like `submit_move`, but rejects with `NotYourTurn` unless `player`
    /// is the side to move.
    pub fn submit_move_as(
        &mut self,
        player: Color,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<AppliedMove, MoveError> {
        if self.status.is_terminal() {
            return Err(self.reject(from, to, MoveError::GameOver));
        }
        if player != self.position.side_to_move() {
            return Err(self.reject(from, to, MoveError::NotYourTurn));
        }
        self.submit_move(from, to, promotion)
    }

    /// Destination squares for the piece on `square`, for move hints. Empty
    /// once the game is decided or when the piece is not the mover's.
    #[must_use]
    pub fn legal_moves_for(&self, square: Square) -> BTreeSet<Square> {
        if self.status.is_terminal() {
            return BTreeSet::new();
        }
        self.position.legal_destinations(square)
    }

    /// All legal moves for the side to move; empty once the game is decided.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        self.position.legal_moves()
    }

    /// `color`'s clock ran out. An undecided game becomes a win for the
    /// opponent; a decided one keeps its status.
    pub fn on_time_expired(&mut self, color: Color) -> TerminalStatus {
        if !self.status.is_terminal() {
            self.status = TerminalStatus::Timeout(color.opponent());
            #[cfg(feature = "logging")]
            log::info!("{color} ran out of time: {}", self.status);
        }
        self.status
    }

    /// Take back the last move, restoring position, repetition counts and
    /// status. Returns `None` with no moves to take back or after a timeout.
    pub fn undo(&mut self) -> Option<AppliedMove> {
        if matches!(self.status, TerminalStatus::Timeout(_)) {
            return None;
        }
        let entry = self.history.pop()?;
        self.repetitions.forget(entry.key);
        self.position.unmake_move(entry.applied.mv, entry.undo);
        self.status = entry.previous_status;
        #[cfg(feature = "logging")]
        log::debug!("took back {}", entry.applied.mv);
        Some(entry.applied)
    }

    /// Start over from the standard position, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    fn apply(&mut self, mv: Move) -> AppliedMove {
        let color = self.position.side_to_move();
        let piece = self
            .position
            .board()
            .piece_on(mv.from())
            .expect("validated move starts on an occupied square");

        let undo = self.position.make_move(mv);
        let key = self.position.zobrist_key();
        self.repetitions.record(key);

        let previous_status = self.status;
        self.status = self.evaluate_status();

        let applied = AppliedMove {
            mv,
            color,
            piece,
            captured: undo.captured().map(|(_, kind)| kind),
            gives_check: self.position.in_check(),
            status: self.status,
        };
        self.history.push(HistoryEntry {
            applied,
            undo,
            previous_status,
            key,
        });

        #[cfg(feature = "logging")]
        {
            log::debug!("{color} played {mv}");
            if self.status.is_terminal() {
                log::info!("game over after {} moves: {}", self.history.len(), self.status);
            }
        }
        applied
    }

    /// Mate and stalemate first, then the fifty-move rule, then repetition.
    fn evaluate_status(&self) -> TerminalStatus {
        let position = &self.position;
        if !position.has_legal_move() {
            return if position.in_check() {
                TerminalStatus::Checkmate(position.side_to_move().opponent())
            } else {
                TerminalStatus::Stalemate
            };
        }
        if position.halfmove_clock() >= self.config.fifty_move_halfmoves() {
            return TerminalStatus::DrawByFiftyMove;
        }
        if self.repetitions.count(position.zobrist_key()) >= self.config.repetition_limit {
            return TerminalStatus::DrawByRepetition;
        }
        TerminalStatus::InProgress
    }

    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn reject(&self, from: Square, to: Square, err: MoveError) -> MoveError {
        #[cfg(feature = "logging")]
        log::debug!("rejected {}{}: {err}", square_label(from), square_label(to));
        err
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Off-board squares come from user input and are printed raw.
#[cfg(feature = "logging")]
fn square_label(sq: Square) -> String {
    if sq.is_valid() {
        sq.to_string()
    } else {
        format!("({}, {})", sq.0, sq.1)
    }
}
