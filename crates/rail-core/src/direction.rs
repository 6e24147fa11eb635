//! Direction of travel along the line, shared by journeys and timetables.
//!
//! A journey is launched with `Forward` (increasing ordinal) or `Reverse`
//! (decreasing ordinal).  `Turnaround` only ever appears as a timetable tag on
//! the entry where a train reverses at a terminal.

use std::str::FromStr;

use crate::RailError;

/// Travel direction, or the turnaround tag for a reversing stop.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards the highest ordinal ("UP" in the operator's timetables).
    #[default]
    Forward,
    /// Towards ordinal 0 ("DOWN").
    Reverse,
    /// Dwell-and-reverse event at a terminal.
    Turnaround,
}

impl Direction {
    /// `true` for the two directions a journey may be launched in.
    #[inline]
    pub fn is_travel(self) -> bool {
        !matches!(self, Direction::Turnaround)
    }

    /// Ordinal step per station: `+1`, `-1`, or `0` for `Turnaround`.
    #[inline]
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward    => 1,
            Direction::Reverse    => -1,
            Direction::Turnaround => 0,
        }
    }

    /// The opposite travel direction.  `Turnaround` maps to itself.
    #[inline]
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Forward    => Direction::Reverse,
            Direction::Reverse    => Direction::Forward,
            Direction::Turnaround => Direction::Turnaround,
        }
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward    => "forward",
            Direction::Reverse    => "reverse",
            Direction::Turnaround => "turnaround",
        }
    }
}

impl FromStr for Direction {
    type Err = RailError;

    /// Accepts `forward`/`up`, `reverse`/`down`, and `turnaround`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "up"   => Ok(Direction::Forward),
            "reverse" | "down" => Ok(Direction::Reverse),
            "turnaround"       => Ok(Direction::Turnaround),
            other => Err(RailError::InvalidArgument(format!(
                "unknown direction {other:?}: expected \"forward\" or \"reverse\""
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
