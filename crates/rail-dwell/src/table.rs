//! Hourly per-station dwell profiles.

use std::collections::HashMap;

use rail_network::Station;

use crate::{DwellOracle, OracleError, OracleResult};

pub const HOURS_PER_DAY: usize = 24;

/// Looks dwell up in a per-station table of 24 hourly values.
///
/// Stations without a profile use `fallback_secs` if set, otherwise the
/// query fails with [`OracleError::UnknownStation`] (and the simulator falls
/// back to the floor).
#[derive(Clone, Debug, Default)]
pub struct TableDwellOracle {
    profiles:      HashMap<String, [f64; HOURS_PER_DAY]>,
    fallback_secs: Option<f64>,
}

impl TableDwellOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 24-hour profile for `station` (index = hour of day).
    pub fn with_profile(mut self, station: &str, hourly_secs: [f64; HOURS_PER_DAY]) -> Self {
        self.profiles.insert(station.to_owned(), hourly_secs);
        self
    }

    /// The same dwell at every hour.
    pub fn with_flat(self, station: &str, secs: f64) -> Self {
        self.with_profile(station, [secs; HOURS_PER_DAY])
    }

    /// Dwell for stations with no profile.
    pub fn with_fallback(mut self, secs: f64) -> Self {
        self.fallback_secs = Some(secs);
        self
    }

    pub fn station_count(&self) -> usize {
        self.profiles.len()
    }
}

impl DwellOracle for TableDwellOracle {
    fn predict(&self, station: &Station, minute_of_day: u32) -> OracleResult<f64> {
        let hour = (minute_of_day as usize / 60) % HOURS_PER_DAY;
        match self.profiles.get(&station.name) {
            Some(profile) => Ok(profile[hour]),
            None => self
                .fallback_secs
                .ok_or_else(|| OracleError::UnknownStation(station.name.clone())),
        }
    }
}
