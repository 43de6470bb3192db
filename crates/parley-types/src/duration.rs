//! Clip durations in `M:SS` form.
//!
//! Recordings carry their length as a `minutes:seconds` string with the
//! seconds zero-padded to two digits. `ClipDuration` is the typed form of
//! that string: it always renders back to the same `M:SS` text and only
//! accepts well-formed input when parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing an `M:SS` duration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("duration '{0}' has no ':' separator")]
    MissingSeparator(String),

    #[error("duration '{0}' has an invalid minutes component")]
    InvalidMinutes(String),

    #[error("duration '{0}' must have exactly two seconds digits")]
    InvalidSeconds(String),

    #[error("seconds value {0} is out of range (0-59)")]
    SecondsOutOfRange(u32),
}

/// Length of one recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClipDuration {
    minutes: u32,
    seconds: u8,
}

impl ClipDuration {
    /// Builds a duration from its components.
    ///
    /// # Errors
    ///
    /// Returns `DurationParseError::SecondsOutOfRange` if `seconds > 59`.
    pub fn new(minutes: u32, seconds: u8) -> Result<Self, DurationParseError> {
        if seconds > 59 {
            return Err(DurationParseError::SecondsOutOfRange(u32::from(seconds)));
        }
        Ok(Self { minutes, seconds })
    }

    /// Builds a duration from a whole number of seconds.
    pub fn from_total_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            // always < 60
            seconds: (total % 60) as u8,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// Returns the duration as fractional minutes (`minutes + seconds / 60`).
    pub fn as_minutes(&self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl FromStr for ClipDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minutes, seconds) = s
            .split_once(':')
            .ok_or_else(|| DurationParseError::MissingSeparator(s.to_string()))?;

        if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DurationParseError::InvalidMinutes(s.to_string()));
        }
        let minutes: u32 = minutes
            .parse()
            .map_err(|_| DurationParseError::InvalidMinutes(s.to_string()))?;

        if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DurationParseError::InvalidSeconds(s.to_string()));
        }
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| DurationParseError::InvalidSeconds(s.to_string()))?;
        if seconds > 59 {
            return Err(DurationParseError::SecondsOutOfRange(seconds));
        }

        Ok(Self {
            minutes,
            seconds: seconds as u8,
        })
    }
}

impl TryFrom<String> for ClipDuration {
    type Error = DurationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClipDuration> for String {
    fn from(value: ClipDuration) -> Self {
        value.to_string()
    }
}
