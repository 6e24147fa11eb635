//! Seeded passenger-load dwell model.
//!
//! # Model
//!
//! ```text
//!  passengers ~ Poisson(peak_mean)       during peak hours
//!             ~ Poisson(off_peak_mean)   otherwise
//!  dwell      = base + secs_per_passenger × passengers + U{0..=jitter_max}
//! ```
//!
//! With the defaults (base 30 s, 0.6721 s per passenger, peak hours 08, 09,
//! 17, 18, means 45 / 20, jitter up to 10 s) a peak-hour dwell averages
//! roughly 65 s and an off-peak one roughly 48 s.
//!
//! # Determinism
//!
//! Every query builds a fresh `SmallRng` seeded from
//! `(seed, station ordinal, minute_of_day)`, mixed with the 64-bit
//! golden-ratio constant.  The same question always gets the same answer,
//! independent of query order or of which thread asks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use rail_network::Station;

use crate::{DwellOracle, OracleError, OracleResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stand-in for a learned dwell model, driven by a seeded passenger count.
#[derive(Clone, Debug)]
pub struct SyntheticDwellOracle {
    pub seed:                     u64,
    pub base_secs:                f64,
    pub secs_per_passenger:       f64,
    /// Upper bound (inclusive) of the uniform whole-second jitter.
    pub jitter_max_secs:          u32,
    /// Hours of day (0–23) that count as peak.
    pub peak_hours:               Vec<u32>,
    pub peak_mean_passengers:     f64,
    pub off_peak_mean_passengers: f64,
}

impl SyntheticDwellOracle {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            base_secs:                30.0,
            secs_per_passenger:       0.6721,
            jitter_max_secs:          10,
            peak_hours:               vec![8, 9, 17, 18],
            peak_mean_passengers:     45.0,
            off_peak_mean_passengers: 20.0,
        }
    }

    pub fn with_peak_hours(mut self, hours: impl IntoIterator<Item = u32>) -> Self {
        self.peak_hours = hours.into_iter().collect();
        self
    }

    pub fn with_passenger_means(mut self, peak: f64, off_peak: f64) -> Self {
        self.peak_mean_passengers = peak;
        self.off_peak_mean_passengers = off_peak;
        self
    }

    pub fn is_peak(&self, minute_of_day: u32) -> bool {
        self.peak_hours.contains(&((minute_of_day / 60) % 24))
    }

    fn rng_for(&self, station: &Station, minute_of_day: u32) -> SmallRng {
        let seed = self.seed
            ^ (station.id.0 as u64 + 1).wrapping_mul(MIXING_CONSTANT)
            ^ (minute_of_day as u64 + 1).wrapping_mul(MIXING_CONSTANT).rotate_left(32);
        SmallRng::seed_from_u64(seed)
    }
}

impl Default for SyntheticDwellOracle {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DwellOracle for SyntheticDwellOracle {
    fn predict(&self, station: &Station, minute_of_day: u32) -> OracleResult<f64> {
        let mean = if self.is_peak(minute_of_day) {
            self.peak_mean_passengers
        } else {
            self.off_peak_mean_passengers
        };

        let mut rng = self.rng_for(station, minute_of_day);
        let passengers = if mean == 0.0 {
            0.0
        } else {
            let dist = Poisson::new(mean).map_err(|e| {
                OracleError::Unavailable(format!("passenger mean {mean} at {}: {e}", station.name))
            })?;
            dist.sample(&mut rng)
        };
        let jitter = rng.gen_range(0..=self.jitter_max_secs) as f64;

        Ok(self.base_secs + self.secs_per_passenger * passengers + jitter)
    }
}
