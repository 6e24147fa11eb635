//! The `DwellOracle` trait and floor clamping.

use std::sync::Arc;

use rail_network::Station;

use crate::OracleResult;

/// Dwell-duration capability consumed by the journey simulator.
///
/// Queried only for intermediate stations mid-journey; terminals always use
/// the fixed turnaround dwell.  `minute_of_day` is in `0..1440`.
///
/// # Thread safety
///
/// Fleets may simulate trains on the Rayon pool with one oracle shared by
/// reference, so implementations must be `Send + Sync`.  An implementation
/// should return the same value for the same `(station, minute_of_day)`; it
/// may be slow.
///
/// # Invalid output
///
/// Errors, NaN, and negative values are not fatal.  The simulator replaces
/// them with the station's dwell floor (see [`clamp_dwell`]).
pub trait DwellOracle: Send + Sync {
    fn predict(&self, station: &Station, minute_of_day: u32) -> OracleResult<f64>;
}

impl<O: DwellOracle + ?Sized> DwellOracle for &O {
    fn predict(&self, station: &Station, minute_of_day: u32) -> OracleResult<f64> {
        (**self).predict(station, minute_of_day)
    }
}

impl<O: DwellOracle + ?Sized> DwellOracle for Box<O> {
    fn predict(&self, station: &Station, minute_of_day: u32) -> OracleResult<f64> {
        (**self).predict(station, minute_of_day)
    }
}

impl<O: DwellOracle + ?Sized> DwellOracle for Arc<O> {
    fn predict(&self, station: &Station, minute_of_day: u32) -> OracleResult<f64> {
        (**self).predict(station, minute_of_day)
    }
}

/// Turn an oracle answer into a usable dwell: at least `floor_secs`, and
/// exactly `floor_secs` when the oracle failed or returned NaN or a negative
/// value.  Failures are logged at `warn`.
pub fn clamp_dwell(station: &str, raw: OracleResult<f64>, floor_secs: f64) -> f64 {
    match raw {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => secs.max(floor_secs),
        Ok(secs) => {
            log::warn!("dwell oracle returned {secs} s for {station}; using floor {floor_secs} s");
            floor_secs
        }
        Err(e) => {
            log::warn!("dwell oracle failed for {station}: {e}; using floor {floor_secs} s");
            floor_secs
        }
    }
}
