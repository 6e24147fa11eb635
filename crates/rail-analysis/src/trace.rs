//! Time-space projection of train runs.
//!
//! Each station call becomes two points with the same ordinal, one at the
//! arrival (or journey start) and one at the departure, so a plot shows
//! dwells as flat runs and movement as slopes.  No physics happens here.

use rail_core::{RailResult, SimTime, StationId, TrainId};
use rail_fleet::FleetTimetable;
use rail_journey::TrainRun;
use rail_network::StationNetwork;

// ── Trace types ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TracePoint {
    pub time:      SimTime,
    pub ordinal:   u32,
    /// Distance from ordinal 0, metres.
    pub chainage_m: f64,
}

/// One inter-station movement in a trace.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transit {
    pub from:       StationId,
    pub to:         StationId,
    pub depart:     SimTime,
    pub arrive:     SimTime,
    pub distance_m: f64,
}

/// Mid-segment marker for highlighting long segments on a plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentMarker {
    pub time:       SimTime,
    /// Fractional ordinal halfway between the two stations.
    pub position:   f64,
    pub distance_m: f64,
}

/// The plotted path of one train.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSpaceTrace {
    pub train_id: TrainId,
    pub points:   Vec<TracePoint>,
    pub transits: Vec<Transit>,
}

impl TimeSpaceTrace {
    /// Midpoints of every traversed segment at least `min_distance_m` long.
    pub fn long_segment_markers(&self, min_distance_m: f64) -> Vec<SegmentMarker> {
        self.transits
            .iter()
            .filter(|t| t.distance_m >= min_distance_m)
            .map(|t| SegmentMarker {
                time:       SimTime(t.depart.0 + (t.arrive.0 - t.depart.0) / 2),
                position:   (t.from.0 as f64 + t.to.0 as f64) / 2.0,
                distance_m: t.distance_m,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ── TraceBuilder ──────────────────────────────────────────────────────────────

/// Projects runs onto `(time, ordinal)` using the network for chainage and
/// segment lengths.
pub struct TraceBuilder<'a> {
    network: &'a StationNetwork,
}

impl<'a> TraceBuilder<'a> {
    pub fn new(network: &'a StationNetwork) -> Self {
        Self { network }
    }

    /// One trace per run, in run order.
    pub fn build(&self, timetable: &FleetTimetable) -> RailResult<Vec<TimeSpaceTrace>> {
        timetable.runs.iter().map(|r| self.build_run(r)).collect()
    }

    /// # Errors
    ///
    /// [`RailError::StationOutOfRange`](rail_core::RailError::StationOutOfRange)
    /// or `InvalidArgument` when the run was simulated on a different network.
    pub fn build_run(&self, run: &TrainRun) -> RailResult<TimeSpaceTrace> {
        let mut points = Vec::with_capacity(run.len() * 2);
        for e in &run.entries {
            let chainage_m = self.network.cumulative_distance_m(e.station)?;
            points.push(TracePoint { time: e.at, ordinal: e.station.0, chainage_m });
            if let Some(departure) = e.departure {
                points.push(TracePoint { time: departure, ordinal: e.station.0, chainage_m });
            }
        }

        let mut transits = Vec::with_capacity(run.len().saturating_sub(1));
        for pair in run.entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (Some(depart), Some(arrive)) = (a.departure, b.arrival) else {
                continue;
            };
            let distance_m = self.network.segment(a.station, b.station)?.distance_m;
            transits.push(Transit { from: a.station, to: b.station, depart, arrive, distance_m });
        }

        Ok(TimeSpaceTrace { train_id: run.train_id, points, transits })
    }
}
