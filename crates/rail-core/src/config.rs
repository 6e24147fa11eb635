//! Simulation configuration.
//!
//! Every tunable the engine reads lives here with the defaults observed on
//! the Gaimukh – Cadbury Junction corridor.  Applications typically load a
//! `SimConfig` from JSON (feature `serde`) and pass it to the fleet builder,
//! which calls [`SimConfig::validate`] once up front.

use std::collections::BTreeMap;

use crate::{RailError, RailResult};

// ── KinematicsConfig ──────────────────────────────────────────────────────────

/// Safety margins and numerical floors for the three-phase motion model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KinematicsConfig {
    /// Distance reserved for service braking before the platform.  Default 150 m.
    pub brake_distance_m: f64,

    /// Extra overlap kept beyond the braking curve.  Default 50 m.
    pub buffer_distance_m: f64,

    /// The accelerating distance is `distance / accel_distance_divisor`.
    /// Default 8.
    pub accel_distance_divisor: f64,

    /// Floor for the accelerating distance on very short segments.
    pub min_accel_distance_m: f64,

    /// Floor for the derived acceleration, keeps every division finite.
    pub min_accel_mps2: f64,

    /// Whether the buffer counts towards the deceleration phase
    /// (`brake + buffer`).  `false` reproduces the brake-only variant.
    pub include_buffer_in_braking: bool,
}

impl KinematicsConfig {
    /// Distance used by the deceleration phase and by headway separation.
    #[inline]
    pub fn braking_margin_m(&self) -> f64 {
        if self.include_buffer_in_braking {
            self.brake_distance_m + self.buffer_distance_m
        } else {
            self.brake_distance_m
        }
    }

    pub fn validate(&self) -> RailResult<()> {
        non_negative("brake_distance_m", self.brake_distance_m)?;
        non_negative("buffer_distance_m", self.buffer_distance_m)?;
        positive("accel_distance_divisor", self.accel_distance_divisor)?;
        positive("min_accel_distance_m", self.min_accel_distance_m)?;
        positive("min_accel_mps2", self.min_accel_mps2)?;
        Ok(())
    }
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            brake_distance_m:          150.0,
            buffer_distance_m:         50.0,
            accel_distance_divisor:    8.0,
            min_accel_distance_m:      1e-3,
            min_accel_mps2:            1e-6,
            include_buffer_in_braking: true,
        }
    }
}

// ── DwellConfig ───────────────────────────────────────────────────────────────

/// Dwell floors and terminal turnaround duration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DwellConfig {
    /// Minimum dwell applied to oracle output at stations without an entry
    /// in `station_floors`.  Default 15 s.
    pub default_floor_secs: f64,

    /// Per-station floor overrides, keyed by station name.
    pub station_floors: BTreeMap<String, f64>,

    /// Fixed dwell at the active-direction terminal.  Default 180 s.
    pub turnaround_secs: f64,
}

impl DwellConfig {
    /// The floor that applies at `station`.
    pub fn floor_for(&self, station: &str) -> f64 {
        self.station_floors
            .get(station)
            .copied()
            .unwrap_or(self.default_floor_secs)
    }

    pub fn validate(&self) -> RailResult<()> {
        non_negative("default_floor_secs", self.default_floor_secs)?;
        non_negative("turnaround_secs", self.turnaround_secs)?;
        for (station, &floor) in &self.station_floors {
            if !floor.is_finite() || floor < 0.0 {
                return Err(RailError::Configuration(format!(
                    "dwell floor for station {station:?} must be a non-negative number, got {floor}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DwellConfig {
    fn default() -> Self {
        Self {
            default_floor_secs: 15.0,
            station_floors:     BTreeMap::new(),
            turnaround_secs:    180.0,
        }
    }
}

// ── Speed tiers ───────────────────────────────────────────────────────────────

/// One row of a distance → target-speed table.
///
/// Matches distances in the half-open range `[min_distance_m, max_distance_m)`;
/// `max_distance_m = None` is unbounded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedTier {
    pub min_distance_m: f64,
    pub max_distance_m: Option<f64>,
    pub vmax_kmh:       f64,
}

impl SpeedTier {
    pub fn new(min_distance_m: f64, max_distance_m: Option<f64>, vmax_kmh: f64) -> Self {
        Self { min_distance_m, max_distance_m, vmax_kmh }
    }

    #[inline]
    pub fn contains(&self, distance_m: f64) -> bool {
        distance_m >= self.min_distance_m
            && self.max_distance_m.is_none_or(|max| distance_m < max)
    }
}

/// Distance-tiered cruising-speed policy.  The first matching tier wins;
/// distances matched by no tier use `default_vmax_kmh`.
///
/// The presets are the operating strategies that were compared on the
/// corridor; they are data, not physics, and any table may be supplied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedTierTable {
    pub tiers:            Vec<SpeedTier>,
    pub default_vmax_kmh: f64,
}

impl SpeedTierTable {
    /// 30 km/h up to 800 m, 35 km/h beyond.
    pub fn baseline() -> Self {
        Self {
            tiers: vec![
                SpeedTier::new(0.0, Some(800.0), 30.0),
                SpeedTier::new(800.0, None, 35.0),
            ],
            default_vmax_kmh: 30.0,
        }
    }

    /// 33 km/h up to 800 m, 38 km/h beyond.
    pub fn optimized() -> Self {
        Self {
            tiers: vec![
                SpeedTier::new(0.0, Some(800.0), 33.0),
                SpeedTier::new(800.0, None, 38.0),
            ],
            default_vmax_kmh: 33.0,
        }
    }

    /// Speed up only where the segment is long enough to benefit:
    /// 33 km/h on 1100–1200 m, 35 km/h from 1250 m, 30 km/h elsewhere.
    pub fn conditional() -> Self {
        Self {
            tiers: vec![
                SpeedTier::new(0.0, Some(900.0), 30.0),
                SpeedTier::new(1_100.0, Some(1_200.0), 33.0),
                SpeedTier::new(1_250.0, None, 35.0),
            ],
            default_vmax_kmh: 30.0,
        }
    }

    /// 30 km/h below 900 m, 36 km/h on 900–1100 m, 38 km/h from 1100 m.
    pub fn graded() -> Self {
        Self {
            tiers: vec![
                SpeedTier::new(0.0, Some(900.0), 30.0),
                SpeedTier::new(900.0, Some(1_100.0), 36.0),
                SpeedTier::new(1_100.0, None, 38.0),
            ],
            default_vmax_kmh: 30.0,
        }
    }

    /// Target cruising speed for a segment of `distance_m`, before any civil
    /// speed cap is applied.
    pub fn lookup_kmh(&self, distance_m: f64) -> f64 {
        self.tiers
            .iter()
            .find(|t| t.contains(distance_m))
            .map_or(self.default_vmax_kmh, |t| t.vmax_kmh)
    }

    pub fn validate(&self) -> RailResult<()> {
        positive("default_vmax_kmh", self.default_vmax_kmh)?;
        for (i, tier) in self.tiers.iter().enumerate() {
            if !tier.vmax_kmh.is_finite() || tier.vmax_kmh <= 0.0 {
                return Err(RailError::Configuration(format!(
                    "speed tier {i} has non-positive vmax {} km/h",
                    tier.vmax_kmh
                )));
            }
            if !tier.min_distance_m.is_finite() || tier.min_distance_m < 0.0 {
                return Err(RailError::Configuration(format!(
                    "speed tier {i} has invalid lower bound {} m",
                    tier.min_distance_m
                )));
            }
            if let Some(max) = tier.max_distance_m
                && !(max > tier.min_distance_m)
            {
                return Err(RailError::Configuration(format!(
                    "speed tier {i} has empty range [{}, {max}) m",
                    tier.min_distance_m
                )));
            }
        }
        Ok(())
    }
}

impl Default for SpeedTierTable {
    fn default() -> Self {
        Self::baseline()
    }
}

// ── JourneyEnd ────────────────────────────────────────────────────────────────

/// When a single train's journey stops.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JourneyEnd {
    /// Out to the far terminal and back to the origin, then stop (or earlier
    /// if the horizon is reached).
    #[default]
    RoundTrip,
    /// Shuttle between the origin and the far terminal until the horizon.
    Horizon,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub kinematics:  KinematicsConfig,
    pub dwell:       DwellConfig,
    pub speed_tiers: SpeedTierTable,
    pub journey_end: JourneyEnd,
}

impl SimConfig {
    /// Check every section.  A shuttle that runs until the horizon must make
    /// progress on every lap, so `Horizon` mode additionally requires a
    /// positive turnaround.
    pub fn validate(&self) -> RailResult<()> {
        self.kinematics.validate()?;
        self.dwell.validate()?;
        self.speed_tiers.validate()?;
        if self.journey_end == JourneyEnd::Horizon && self.dwell.turnaround_secs <= 0.0 {
            return Err(RailError::Configuration(
                "turnaround_secs must be positive when journeys run until the horizon".into(),
            ));
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_negative(field: &str, value: f64) -> RailResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RailError::Configuration(format!("{field} must be a non-negative number, got {value}")))
    }
}

fn positive(field: &str, value: f64) -> RailResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RailError::Configuration(format!("{field} must be a positive number, got {value}")))
    }
}
