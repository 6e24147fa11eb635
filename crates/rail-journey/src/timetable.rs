//! Timetable records produced by a journey.

use rail_core::{Direction, SimTime, StationId, TrainId};

// ── TimetableEntry ────────────────────────────────────────────────────────────

/// One station call of one train.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimetableEntry {
    pub train_id:  TrainId,
    pub station:   StationId,
    /// `None` only for the first entry of a journey.
    pub arrival:   Option<SimTime>,
    /// `None` only for a final entry whose departure falls past the horizon.
    pub departure: Option<SimTime>,
    /// Direction of the leg being travelled, or `Turnaround` where the train
    /// reverses.
    pub direction: Direction,
    /// Dwell applied here, after floor clamping.
    pub dwell_secs: f64,
    /// Peak speed on the segment the train departs onto, km/h.  `None` when
    /// the train does not depart.
    pub departing_peak_kmh: Option<f64>,
    /// The moment the train is at the station: the arrival, or the journey
    /// start for the first entry.
    pub at: SimTime,
}

impl TimetableEntry {
    #[inline]
    pub fn is_turnaround(&self) -> bool {
        self.direction == Direction::Turnaround
    }

    /// Time the station is left, or the arrival when there is no departure.
    #[inline]
    pub fn last_time(&self) -> SimTime {
        self.departure.unwrap_or(self.at)
    }
}

// ── TrainRun ──────────────────────────────────────────────────────────────────

/// Why a journey stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunEnd {
    /// Departed the origin again after a round trip.
    Completed,
    /// The horizon fell during a dwell; the last entry has no departure.
    Truncated,
    /// The next arrival would have been past the horizon.
    HorizonReached,
}

/// The chronological log of one train's journey.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainRun {
    pub train_id:   TrainId,
    pub origin:     StationId,
    pub direction:  Direction,
    pub start_time: SimTime,
    /// Insertion order is chronological order.
    pub entries:    Vec<TimetableEntry>,
    /// Latest instant the run accounted for.
    pub current_time: SimTime,
    pub end:        RunEnd,
}

impl TrainRun {
    pub(crate) fn new(train_id: TrainId, origin: StationId, direction: Direction, start_time: SimTime) -> Self {
        Self {
            train_id,
            origin,
            direction,
            start_time,
            entries: Vec::new(),
            current_time: start_time,
            end: RunEnd::HorizonReached,
        }
    }

    pub(crate) fn push(&mut self, entry: TimetableEntry) {
        debug_assert!(entry.at >= self.current_time);
        self.current_time = entry.last_time();
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn turnarounds(&self) -> impl Iterator<Item = &TimetableEntry> {
        self.entries.iter().filter(|e| e.is_turnaround())
    }

    /// `true` if the round trip finished before the horizon.
    pub fn is_complete(&self) -> bool {
        self.end == RunEnd::Completed
    }

    /// Seconds from the journey start to the last recorded instant.
    pub fn duration_secs(&self) -> f64 {
        self.current_time.secs_since(self.start_time)
    }
}
