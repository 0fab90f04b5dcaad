//! Clock times and time-of-day intervals.
//!
//! # Time Model
//! All times are minutes since midnight on a 24-hour clock. A shift never
//! crosses midnight, so an interval is valid iff `start < end`.
//!
//! Overlap is strict: `[09:00, 11:00)` and `[11:00, 13:00)` touch but do
//! not overlap, so a worker may take back-to-back shifts.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A time of day with minute resolution.
///
/// Serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// 00:00.
    pub const MIDNIGHT: Self = Self(0);

    const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a clock time from hour and minute.
    ///
    /// # Panics
    /// If `hour >= 24` or `minute >= 60`.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "clock time out of range");
        Self(hour * 60 + minute)
    }

    /// Creates a clock time from minutes since midnight.
    ///
    /// Returns `None` for values of 24:00 or later.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < Self::MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parses `HH:MM` (surrounding whitespace ignored).
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        NaiveTime::parse_from_str(input.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|_| ParseError::InvalidTime {
                input: input.to_string(),
            })
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60, so this always fits.
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// A time-of-day interval `[start, end)`.
///
/// Construction does not enforce `start < end`; malformed intervals are
/// representable so that the boundary layer can report them and the
/// engine can skip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Shorthand for `TimeInterval::new(ClockTime::hm(..), ClockTime::hm(..))`.
    pub const fn hm(start_hour: u16, start_minute: u16, end_hour: u16, end_minute: u16) -> Self {
        Self {
            start: ClockTime::hm(start_hour, start_minute),
            end: ClockTime::hm(end_hour, end_minute),
        }
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Duration in minutes (0 for malformed intervals).
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes().saturating_sub(self.start.minutes()))
    }

    /// Duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }

    /// Whether two intervals overlap (touching endpoints do not count).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether this interval lies entirely inside `outer`.
    pub fn is_within(&self, outer: &Self) -> bool {
        self.start >= outer.start && self.end <= outer.end
    }

    /// Parses `HH:MM-HH:MM`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (start, end) = input.split_once('-').ok_or_else(|| ParseError::InvalidRange {
            input: input.to_string(),
        })?;
        Ok(Self::new(ClockTime::parse(start)?, ClockTime::parse(end)?))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeInterval {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
