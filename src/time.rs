//! Wall-clock time arithmetic.
//!
//! All scheduling math runs on minute offsets from midnight. A range whose
//! end is numerically before its start is understood to wrap past midnight
//! into the following calendar day; every comparison in this module accounts
//! for that uniformly so the rest of the crate never special-cases it.
//!
//! # Conventions
//! - Ranges are half-open: `[start, end)`.
//! - `end >= start` means a same-day range; `end < start` wraps.
//! - Durations are kept at full precision; [`round1`] is for display only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Failure to parse an `"HH:MM"` wall-clock string.
///
/// This is the crate's only fallible boundary: once a [`ClockTime`] exists
/// it is well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    /// Input was not of the form `HH:MM`.
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidFormat(String),
    /// Hour or minute component outside `00..=23` / `00..=59`.
    #[error("time component out of range in '{0}'")]
    OutOfRange(String),
}

/// A wall-clock time of day, stored as minutes since midnight (`0..1440`).
///
/// Serializes as the `"HH:MM"` wire format the surrounding system uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Creates a time from hour and minute components.
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Hour component (0..=23).
    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    /// Minute component (0..=59).
    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % 60
    }

    /// Adds a minute offset, wrapping modulo 24:00. Negative offsets wrap
    /// backwards.
    pub fn add_minutes(self, minutes: i64) -> Self {
        let day = MINUTES_PER_DAY as i64;
        let total = (self.0 as i64 + minutes).rem_euclid(day);
        Self(total as u32)
    }

    /// Adds a (possibly fractional) number of hours, wrapping modulo 24:00.
    pub fn add_hours(self, hours: f64) -> Self {
        self.add_minutes((hours * 60.0).round() as i64)
    }
}

impl FromStr for ClockTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::InvalidFormat(s.to_string()))?;
        let hour: u32 = h
            .parse()
            .map_err(|_| ParseTimeError::InvalidFormat(s.to_string()))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| ParseTimeError::InvalidFormat(s.to_string()))?;
        Self::from_hm(hour, minute).ok_or_else(|| ParseTimeError::OutOfRange(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

/// Whether the range `[start, end)` wraps past midnight.
#[inline]
pub fn wraps_midnight(start: ClockTime, end: ClockTime) -> bool {
    end < start
}

/// Duration of `[start, end)` in hours, wrap-aware.
///
/// `end >= start` gives a same-day duration; otherwise the range crosses
/// midnight and the remainder of the day plus the morning portion is summed.
pub fn duration_hours(start: ClockTime, end: ClockTime) -> f64 {
    let s = start.minutes() as f64;
    let e = end.minutes() as f64;
    if e >= s {
        (e - s) / 60.0
    } else {
        (MINUTES_PER_DAY as f64 - s + e) / 60.0
    }
}

/// Rounds a duration to one decimal place for display.
pub fn round1(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Whether the instant `t` falls inside `[start, end)`, wrap-aware.
pub fn contains(start: ClockTime, end: ClockTime, t: ClockTime) -> bool {
    if wraps_midnight(start, end) {
        t >= start || t < end
    } else {
        t >= start && t < end
    }
}

/// Whether two half-open ranges on the same day overlap, wrap-aware.
///
/// Three cases:
/// - neither wraps: plain half-open interval test;
/// - both wrap: they always share the region around midnight;
/// - exactly one wraps: the non-wrapping range is tested against both
///   disjoint halves of the wrapping one, `[start, 24:00)` and
///   `[00:00, end)`.
pub fn ranges_overlap(
    a_start: ClockTime,
    a_end: ClockTime,
    b_start: ClockTime,
    b_end: ClockTime,
) -> bool {
    match (wraps_midnight(a_start, a_end), wraps_midnight(b_start, b_end)) {
        (false, false) => a_start < b_end && b_start < a_end,
        (true, true) => true,
        (true, false) => b_start < a_end || b_end > a_start,
        (false, true) => a_start < b_end || a_end > b_start,
    }
}
