//! Service-day time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter measured from the
//! midnight that opens the service day:
//!
//!   clock_of_day = SimTime.0 / 1000 seconds after 00:00:00
//!
//! The kinematic model produces fractional seconds; they are rounded to the
//! nearest millisecond when added to a `SimTime`.  Keeping the canonical unit
//! an integer means timetable comparisons and merges are exact and a run's
//! timestamps can never drift backwards through accumulated rounding.
//!
//! Values past 24:00:00 are legal and render as `24:05:00`, `25:10:00`, … so
//! late-night service stays monotonically interpretable.

use std::fmt;
use std::str::FromStr;

use crate::{RailError, RailResult};

const MS_PER_SEC: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SEC;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MINUTES_PER_DAY: u64 = 24 * 60;

/// An instant on the simulated service day, in milliseconds after midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// Build from clock components.  `minutes` and `seconds` are not range
    /// checked here; use [`SimTime::parse`] for untrusted input.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> SimTime {
        SimTime(
            hours as u64 * MS_PER_HOUR + minutes as u64 * MS_PER_MINUTE + seconds as u64 * MS_PER_SEC,
        )
    }

    /// Convert fractional seconds after midnight.  Negative and NaN inputs
    /// clamp to midnight.
    pub fn from_secs_f64(secs: f64) -> SimTime {
        SimTime(secs_to_ms(secs))
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / MS_PER_SEC as f64
    }

    /// Advance by `secs` seconds, rounded to the nearest millisecond.
    ///
    /// Negative or NaN durations advance by zero, so the result is never
    /// earlier than `self`.
    #[inline]
    pub fn add_secs(self, secs: f64) -> SimTime {
        SimTime(self.0.saturating_add(secs_to_ms(secs)))
    }

    /// Signed seconds from `earlier` to `self` (negative if `self` is earlier).
    #[inline]
    pub fn secs_since(self, earlier: SimTime) -> f64 {
        (self.0 as i128 - earlier.0 as i128) as f64 / MS_PER_SEC as f64
    }

    /// Minute of the (wrapped) day in `0..1440`, as consumed by dwell oracles.
    #[inline]
    pub fn minute_of_day(self) -> u32 {
        ((self.0 / MS_PER_MINUTE) % MINUTES_PER_DAY) as u32
    }

    /// Break into `(hours, minutes, seconds)`; hours are not wrapped.
    pub fn hms(self) -> (u64, u32, u32) {
        let total_secs = self.0 / MS_PER_SEC;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }

    /// Parse `HH:MM` or `HH:MM:SS`.
    ///
    /// Minutes and seconds must be below 60.  Hours may exceed 23.
    pub fn parse(s: &str) -> RailResult<SimTime> {
        let invalid = || RailError::InvalidArgument(format!("malformed time {s:?}: expected HH:MM or HH:MM:SS"));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(invalid());
        }
        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }
        let [h, m, sec] = fields;
        if m >= 60 || sec >= 60 {
            return Err(invalid());
        }
        Ok(SimTime::from_hms(h, m, sec))
    }
}

impl FromStr for SimTime {
    type Err = RailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SimTime::parse(s)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

fn secs_to_ms(secs: f64) -> u64 {
    if secs.is_nan() || secs <= 0.0 {
        return 0;
    }
    // `as` saturates for values beyond u64::MAX.
    (secs * MS_PER_SEC as f64).round() as u64
}
