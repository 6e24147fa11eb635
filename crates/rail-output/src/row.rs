//! Plain data row types written by output backends.
//!
//! Rows carry station names rather than ids so every backend writes
//! self-describing records.  Times stay as [`SimTime`]; each backend picks
//! its own rendering (`HH:MM:SS` text for CSV, milliseconds for SQLite).

use rail_analysis::{HeadwayViolation, TimeSpaceTrace};
use rail_core::{Direction, RailResult, SimTime, TrainId};
use rail_journey::TimetableEntry;
use rail_network::StationNetwork;

/// One station call.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableRow {
    pub train_id:           TrainId,
    pub station:            String,
    pub ordinal:            u32,
    pub arrival:            Option<SimTime>,
    pub departure:          Option<SimTime>,
    pub direction:          Direction,
    pub dwell_secs:         f64,
    pub departing_peak_kmh: Option<f64>,
}

impl TimetableRow {
    pub fn from_entry(entry: &TimetableEntry, network: &StationNetwork) -> RailResult<Self> {
        let station = network.station(entry.station)?;
        Ok(Self {
            train_id:           entry.train_id,
            station:            station.name.clone(),
            ordinal:            entry.station.0,
            arrival:            entry.arrival,
            departure:          entry.departure,
            direction:          entry.direction,
            dwell_secs:         entry.dwell_secs,
            departing_peak_kmh: entry.departing_peak_kmh,
        })
    }
}

/// One headway violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationRow {
    /// `"station"` or `"segment"`.
    pub kind:              &'static str,
    /// Human-readable location, e.g. `GAIMUKH -> GOWNIWADA`.
    pub location:          String,
    pub train_a:           TrainId,
    pub train_b:           TrainId,
    pub observed_gap_secs: f64,
    pub required_gap_secs: f64,
    pub at:                SimTime,
}

impl ViolationRow {
    pub fn from_violation(v: &HeadwayViolation, network: &StationNetwork) -> Self {
        Self {
            kind:              if v.location.is_station() { "station" } else { "segment" },
            location:          v.location.label(network),
            train_a:           v.train_a,
            train_b:           v.train_b,
            observed_gap_secs: v.observed_gap_secs,
            required_gap_secs: v.required_gap_secs,
            at:                v.at,
        }
    }
}

/// One point of a time-space trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePointRow {
    pub train_id:   TrainId,
    pub time:       SimTime,
    pub ordinal:    u32,
    pub chainage_m: f64,
}

impl TracePointRow {
    /// Flatten a trace into rows, in point order.
    pub fn from_trace(trace: &TimeSpaceTrace) -> Vec<Self> {
        trace
            .points
            .iter()
            .map(|p| Self {
                train_id:   trace.train_id,
                time:       p.time,
                ordinal:    p.ordinal,
                chainage_m: p.chainage_m,
            })
            .collect()
    }
}
