//! The "no oracle" behaviour.

use rail_network::Station;

use crate::{DwellOracle, OracleResult};

/// A [`DwellOracle`] that returns each station's `base_dwell_secs`,
/// regardless of the time of day.
#[derive(Copy, Clone, Debug, Default)]
pub struct BaseDwell;

impl DwellOracle for BaseDwell {
    fn predict(&self, station: &Station, _minute_of_day: u32) -> OracleResult<f64> {
        Ok(station.base_dwell_secs)
    }
}
