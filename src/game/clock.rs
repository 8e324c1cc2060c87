//! Per-side game clock.
//!
//! The clock only counts down. Measuring elapsed time is the caller's job:
//! it calls `tick` with however much time passed for the side to move and
//! forwards a reported flag fall to `GameState::on_time_expired`.

use std::time::Duration;

use crate::board::Color;
use crate::config::TimeControl;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    remaining: [Duration; 2],
    increment: Duration,
    flagged: Option<Color>,
}

impl Clock {
    #[must_use]
    pub fn new(time_control: TimeControl) -> Self {
        Clock {
            remaining: [time_control.initial; 2],
            increment: time_control.increment,
            flagged: None,
        }
    }

    /// Restore both sides to the time control's starting time.
    pub fn reset(&mut self, time_control: TimeControl) {
        *self = Clock::new(time_control);
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }

    /// Whether `color`'s time has run out.
    #[inline]
    #[must_use]
    pub fn is_flagged(&self, color: Color) -> bool {
        self.flagged == Some(color)
    }

    /// The side whose time ran out first, if any.
    #[inline]
    #[must_use]
    pub fn flagged(&self) -> Option<Color> {
        self.flagged
    }

    /// Charge `elapsed` to `color`. Returns `Some(color)` on the tick that
    /// takes its time to zero; once a flag has fallen the clock is frozen
    /// and later ticks return `None`.
    pub fn tick(&mut self, color: Color, elapsed: Duration) -> Option<Color> {
        if self.flagged.is_some() {
            return None;
        }
        let slot = &mut self.remaining[color.index()];
        *slot = slot.saturating_sub(elapsed);
        if slot.is_zero() {
            self.flagged = Some(color);
            return Some(color);
        }
        None
    }

    /// Credit the per-move increment after `color` completes a move.
    pub fn add_increment(&mut self, color: Color) {
        if self.flagged.is_none() {
            self.remaining[color.index()] += self.increment;
        }
    }

    /// Remaining time as `m:ss`, rounded down to the second.
    #[must_use]
    pub fn format_remaining(&self, color: Color) -> String {
        format_time(self.remaining(color))
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new(TimeControl::default())
    }
}

/// Render a duration as minutes and zero-padded seconds, e.g. `4:05`.
#[must_use]
pub fn format_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
