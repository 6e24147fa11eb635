//! Fleet-wide results.

use rail_core::{RailError, TrainId};
use rail_journey::{TimetableEntry, TrainRun};

use crate::StartSpec;

/// A spec that could not be simulated, with the train id it was assigned.
#[derive(Debug)]
pub struct RunFailure {
    pub train_id: TrainId,
    pub spec:     StartSpec,
    pub error:    RailError,
}

/// Every run of a fleet plus the specs that failed.
///
/// `runs` is ordered by train id.  A failed spec keeps its id, so ids in
/// `runs` may have gaps.
#[derive(Debug, Default)]
pub struct FleetTimetable {
    pub runs:     Vec<TrainRun>,
    pub failures: Vec<RunFailure>,
}

impl FleetTimetable {
    pub fn run(&self, train_id: TrainId) -> Option<&TrainRun> {
        self.runs.iter().find(|r| r.train_id == train_id)
    }

    pub fn entry_count(&self) -> usize {
        self.runs.iter().map(TrainRun::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// All entries of all runs, ordered by the time each train is at its
    /// station; ties go to the lower train id.  Each run's own order is kept.
    pub fn merged(&self) -> Vec<&TimetableEntry> {
        let mut all: Vec<&TimetableEntry> = self.runs.iter().flat_map(|r| r.entries.iter()).collect();
        all.sort_by_key(|e| (e.at, e.train_id));
        all
    }
}
