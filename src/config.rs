//! Game configuration: time control and draw thresholds.
//!
//! Options can also be set by name, the way a front end forwards
//! `setoption name <name> value <value>` lines.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Five minutes per side.
pub const DEFAULT_INITIAL_TIME: Duration = Duration::from_secs(300);
/// Fifty full moves without a pawn move or capture.
pub const DEFAULT_FIFTY_MOVE_LIMIT: u32 = 50;
/// Threefold repetition.
pub const DEFAULT_REPETITION_LIMIT: u32 = 3;

/// Starting time per side plus a per-move increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeControl {
    pub initial: Duration,
    pub increment: Duration,
}

impl TimeControl {
    #[must_use]
    pub const fn new(initial: Duration, increment: Duration) -> Self {
        TimeControl { initial, increment }
    }

    /// No increment.
    #[must_use]
    pub const fn sudden_death(initial: Duration) -> Self {
        TimeControl {
            initial,
            increment: Duration::ZERO,
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        TimeControl::sudden_death(DEFAULT_INITIAL_TIME)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub time_control: TimeControl,
    /// Full moves without a pawn move or capture before the game is drawn
    pub fifty_move_limit: u32,
    /// Occurrences of the same position before the game is drawn
    pub repetition_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            time_control: TimeControl::default(),
            fifty_move_limit: DEFAULT_FIFTY_MOVE_LIMIT,
            repetition_limit: DEFAULT_REPETITION_LIMIT,
        }
    }
}

impl GameConfig {
    /// Half-move clock value at which the fifty-move draw applies.
    #[inline]
    #[must_use]
    pub fn fifty_move_halfmoves(&self) -> u32 {
        self.fifty_move_limit.saturating_mul(2)
    }

    /// Set an option by its display name, ignoring case and surrounding
    /// whitespace. Times are whole seconds.
    ///
    /// Recognized names: `Initial Time`, `Increment`, `Fifty Move Limit`,
    /// `Repetition Limit`.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "initial time" => {
                let secs = parse_number(name, value)?;
                if secs == 0 {
                    return Err(ConfigError::OutOfRange {
                        name: name.trim().to_string(),
                        value: secs,
                    });
                }
                self.time_control.initial = Duration::from_secs(secs);
            }
            "increment" => {
                self.time_control.increment = Duration::from_secs(parse_number(name, value)?);
            }
            "fifty move limit" => {
                self.fifty_move_limit = parse_limit(name, value)?;
            }
            "repetition limit" => {
                self.repetition_limit = parse_limit(name, value)?;
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.trim().to_string(),
                })
            }
        }
        Ok(())
    }

    /// Apply a `setoption name <name> value <value>` line.
    pub fn apply_setoption(&mut self, line: &str) -> Result<(), ConfigError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (name, value) = parse_setoption(&parts).ok_or_else(|| ConfigError::Malformed {
            line: line.trim().to_string(),
        })?;
        let value = value.ok_or_else(|| ConfigError::MissingValue { name: name.clone() })?;
        self.apply_option(&name, &value)
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        })
}

/// Draw thresholds must be at least 1 and fit a `u32`.
fn parse_limit(name: &str, value: &str) -> Result<u32, ConfigError> {
    let n = parse_number(name, value)?;
    match u32::try_from(n) {
        Ok(limit) if limit >= 1 => Ok(limit),
        _ => Err(ConfigError::OutOfRange {
            name: name.trim().to_string(),
            value: n,
        }),
    }
}

/// Split `setoption name <name...> value <value...>` into its parts.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some((name_parts.join(" "), value))
}

/// Error type for rejected configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No option has this name
    UnknownOption { name: String },
    /// The value could not be parsed as a whole number
    InvalidValue { name: String, value: String },
    /// The value parsed but is not allowed for this option
    OutOfRange { name: String, value: u64 },
    /// A `setoption` line without a `value` part
    MissingValue { name: String },
    /// A line that is not `setoption name ...`
    Malformed { line: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
            ConfigError::OutOfRange { name, value } => {
                write!(f, "Value {value} out of range for option '{name}'")
            }
            ConfigError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            ConfigError::Malformed { line } => write!(f, "Malformed option line '{line}'"),
        }
    }
}

impl std::error::Error for ConfigError {}
