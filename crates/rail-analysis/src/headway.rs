//! Minimum safe headway and fleet-wide separation check.
//!
//! # Separation rule
//!
//! A following train must stay out of the braking-plus-buffer zone of the
//! train ahead.  At the cruise speed `v` the policy picks for a segment that
//! zone takes
//!
//! ```text
//!  h_min = (brake + buffer) / v
//! ```
//!
//! to clear.  At a station the strictest adjacent segment applies.
//!
//! # What is compared
//!
//! | Location                       | Pairs                          | Observed gap                       |
//! |--------------------------------|--------------------------------|------------------------------------|
//! | segment, per direction         | consecutive by departure       | min(departure gap, arrival gap)    |
//! | station platform               | consecutive by arrival         | min(arrival gap, departure gap), or the negative overlap when the platform is still occupied |
//!
//! The line is double-track, so a mid-line station has one platform per
//! direction.  A line end has a single platform shared by launches,
//! turnarounds, and returning trains; all of them are keyed with
//! `Direction::Turnaround` there.  Consecutive occupancies of the same train
//! are skipped.

use std::fmt;

use rail_core::{Direction, RailResult, SimTime, SpeedTierTable, StationId, TrainId};
use rail_fleet::FleetTimetable;
use rail_kinematics::{KinematicCalculator, SpeedPolicy};
use rail_network::StationNetwork;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

// ── Location / HeadwayViolation ───────────────────────────────────────────────

/// Where two trains came too close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    /// A station platform.  `direction` names the platform: the travel
    /// direction at a mid-line station, `Turnaround` for the single platform
    /// at either end of the line.
    Station { station: StationId, direction: Direction },
    /// A segment traversed `from → to`.
    Segment { from: StationId, to: StationId },
}

impl Location {
    /// Human-readable label using station names, e.g. `GAIMUKH -> GOWNIWADA`.
    pub fn label(&self, network: &StationNetwork) -> String {
        let name = |id: StationId| {
            network
                .station(id)
                .map_or_else(|_| id.to_string(), |s| s.name.clone())
        };
        match *self {
            Location::Station { station, direction } => format!("{} ({direction})", name(station)),
            Location::Segment { from, to } => format!("{} -> {}", name(from), name(to)),
        }
    }

    pub fn is_station(&self) -> bool {
        matches!(self, Location::Station { .. })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Station { station, direction } => write!(f, "{station} ({direction})"),
            Location::Segment { from, to } => write!(f, "{from} -> {to}"),
        }
    }
}

/// Two trains separated by less than the minimum safe headway.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadwayViolation {
    pub location:          Location,
    /// The train ahead.
    pub train_a:           TrainId,
    /// The following train.
    pub train_b:           TrainId,
    /// Negative when the two occupancies overlap.
    pub observed_gap_secs: f64,
    pub required_gap_secs: f64,
    /// When the following train enters the location.
    pub at:                SimTime,
}

impl HeadwayViolation {
    /// How far short of the required gap the pair fell, seconds.
    pub fn shortfall_secs(&self) -> f64 {
        self.required_gap_secs - self.observed_gap_secs
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Occupancy {
    train: TrainId,
    enter: SimTime,
    leave: SimTime,
}

// ── HeadwayAnalyzer ───────────────────────────────────────────────────────────

/// Computes minimum safe headways and checks fleet timetables against them.
pub struct HeadwayAnalyzer<'a, P: SpeedPolicy = SpeedTierTable> {
    network:    &'a StationNetwork,
    calculator: &'a KinematicCalculator<P>,
}

impl<'a, P: SpeedPolicy> HeadwayAnalyzer<'a, P> {
    pub fn new(network: &'a StationNetwork, calculator: &'a KinematicCalculator<P>) -> Self {
        Self { network, calculator }
    }

    /// `(brake + buffer) / v` where `v` is the tier cruise speed for this
    /// segment, in seconds.
    pub fn min_safe_headway(&self, speed_limit_kmh: f64, distance_m: f64) -> RailResult<f64> {
        let v = self.calculator.effective_top_speed_mps(distance_m, speed_limit_kmh)?;
        Ok(self.calculator.config().braking_margin_m() / v)
    }

    /// Minimum headway on the segment between two adjacent stations.
    pub fn segment_headway(&self, from: StationId, to: StationId) -> RailResult<f64> {
        let seg = self.network.segment(from, to)?;
        self.min_safe_headway(seg.speed_limit_kmh, seg.distance_m)
    }

    /// The strictest headway over the segments touching `station`.
    pub fn station_headway(&self, station: StationId) -> RailResult<f64> {
        let mut required: f64 = 0.0;
        for dir in [Direction::Reverse, Direction::Forward] {
            if let Some(next) = self.network.next(station, dir) {
                required = required.max(self.segment_headway(station, next)?);
            }
        }
        Ok(required)
    }

    /// The platform a call at `station` occupies.
    pub fn platform(&self, station: StationId, direction: Direction) -> Location {
        let at_line_end = station.0 == 0 || station.index() + 1 == self.network.len();
        let direction = if at_line_end { Direction::Turnaround } else { direction };
        Location::Station { station, direction }
    }

    /// Every pair of trains closer than the minimum safe headway, ordered by
    /// the time the following train enters the location.
    pub fn check_fleet(&self, timetable: &FleetTimetable) -> RailResult<Vec<HeadwayViolation>> {
        let mut index: Map<Location, Vec<Occupancy>> = Map::default();

        for run in &timetable.runs {
            for e in &run.entries {
                index
                    .entry(self.platform(e.station, e.direction))
                    .or_default()
                    .push(Occupancy { train: run.train_id, enter: e.at, leave: e.last_time() });
            }
            for pair in run.entries.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if let (Some(depart), Some(arrive)) = (a.departure, b.arrival) {
                    index
                        .entry(Location::Segment { from: a.station, to: b.station })
                        .or_default()
                        .push(Occupancy { train: run.train_id, enter: depart, leave: arrive });
                }
            }
        }

        let mut violations = Vec::new();
        for (location, mut occupancies) in index {
            let required = match location {
                Location::Station { station, .. } => self.station_headway(station)?,
                Location::Segment { from, to } => self.segment_headway(from, to)?,
            };
            occupancies.sort_by_key(|o| (o.enter, o.train));

            for pair in occupancies.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.train == b.train {
                    continue;
                }
                let observed = observed_gap(location, a, b);
                if observed < required {
                    violations.push(HeadwayViolation {
                        location,
                        train_a: a.train,
                        train_b: b.train,
                        observed_gap_secs: observed,
                        required_gap_secs: required,
                        at: b.enter,
                    });
                }
            }
        }

        violations.sort_by(|x, y| {
            (x.at, x.location, x.train_a, x.train_b).cmp(&(y.at, y.location, y.train_a, y.train_b))
        });
        log::info!(
            "headway check: {} runs, {} violations",
            timetable.runs.len(),
            violations.len()
        );
        Ok(violations)
    }
}

fn observed_gap(location: Location, a: Occupancy, b: Occupancy) -> f64 {
    let enter_gap = b.enter.secs_since(a.enter);
    let leave_gap = b.leave.secs_since(a.leave);
    if location.is_station() && b.enter < a.leave {
        return b.enter.secs_since(a.leave);
    }
    enter_gap.min(leave_gap)
}
