//! Minute-of-day clock arithmetic.
//!
//! All plan math happens on whole minutes since midnight, wrapped into
//! `[0, 1440)`. Intermediate values may go negative or past a full day;
//! normalization always uses the double-mod form because a truncating `%`
//! on negative values would land outside the valid range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// AM/PM half of the day in 12-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// Clock display format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12")]
    H12,
    #[serde(rename = "24")]
    H24,
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::H12
    }
}

/// A wall-clock time as minutes since midnight, always in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Wrap an arbitrary minute count into a valid time of day.
    ///
    /// `((m % 1440) + 1440) % 1440` -- correct for any `i32`, including
    /// large negatives (e.g. -1500 wraps to 1380, i.e. 23:00).
    pub fn from_minutes(m: i32) -> Self {
        Self((((m % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY) as u16)
    }

    /// Build from a 24-hour clock reading. Out-of-range components wrap.
    pub fn from_hm(hour: u8, minute: u8) -> Self {
        Self::from_minutes(hour as i32 * 60 + minute as i32)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock (0-23).
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute within the hour (0-59).
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Signed offset, wrapping around midnight in either direction.
    pub fn add_minutes(self, delta: i32) -> Self {
        Self::from_minutes(self.0 as i32 + delta)
    }

    /// Format according to the given display preference.
    pub fn format(self, fmt: TimeFormat) -> String {
        match fmt {
            TimeFormat::H24 => format!("{:02}:{:02}", self.hour(), self.minute()),
            TimeFormat::H12 => {
                let (hour12, period) = hour24_to_12(self.hour());
                format!("{:02}:{:02} {}", hour12, self.minute(), period)
            }
        }
    }

    /// Parse a 24-hour `"HH:MM"` string.
    pub fn parse(s: &str) -> Result<Self, ParseTimeError> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::Malformed(s.to_string()))?;
        let hour: u8 = h
            .parse()
            .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(ParseTimeError::OutOfRange { hour, minute });
        }
        Ok(Self::from_hm(hour, minute))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(TimeFormat::H24))
    }
}

/// Failed to parse a `"HH:MM"` time string.
#[derive(Error, Debug)]
pub enum ParseTimeError {
    #[error("malformed time '{0}', expected HH:MM")]
    Malformed(String),
    #[error("time {hour:02}:{minute:02} out of range")]
    OutOfRange { hour: u8, minute: u8 },
}

/// Convert a 24-hour clock hour to its 12-hour display pair.
///
/// Hour 0 displays as 12 AM, hour 12 as 12 PM.
pub fn hour24_to_12(hour24: u8) -> (u8, Period) {
    let period = if hour24 >= 12 { Period::Pm } else { Period::Am };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    (hour12, period)
}

/// Convert a 12-hour display pair back to the 24-hour clock hour.
pub fn hour12_to_24(hour12: u8, period: Period) -> u8 {
    match (hour12, period) {
        (12, Period::Am) => 0,
        (12, Period::Pm) => 12,
        (h, Period::Am) => h,
        (h, Period::Pm) => h + 12,
    }
}

/// Render a minute count as an `"Xh Ym"` duration (time in bed).
pub fn format_duration_min(total_min: u32) -> String {
    format!("{}h {}m", total_min / 60, total_min % 60)
}
