//! Target cruising-speed policies.
//!
//! # Pluggability
//!
//! The calculator asks a [`SpeedPolicy`] for the cruising speed it would like
//! on a segment of a given length, then caps it at the segment's civil speed
//! limit.  Operating strategies (baseline, optimized, conditional, …) are
//! therefore configuration, not code: the preset [`SpeedTierTable`]s in
//! `rail-core` cover the ones observed on the corridor, and applications may
//! supply their own implementation.

use rail_core::SpeedTierTable;

// ── SpeedPolicy trait ─────────────────────────────────────────────────────────

/// Distance → desired cruising speed.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one calculator can be shared by
/// all trains of a fleet when journeys run on the Rayon pool.
pub trait SpeedPolicy: Send + Sync {
    /// Desired cruising speed in km/h for a segment of `distance_m`, before
    /// the civil speed cap.
    fn target_speed_kmh(&self, distance_m: f64) -> f64;
}

impl SpeedPolicy for SpeedTierTable {
    #[inline]
    fn target_speed_kmh(&self, distance_m: f64) -> f64 {
        self.lookup_kmh(distance_m)
    }
}

impl<P: SpeedPolicy + ?Sized> SpeedPolicy for &P {
    #[inline]
    fn target_speed_kmh(&self, distance_m: f64) -> f64 {
        (**self).target_speed_kmh(distance_m)
    }
}

impl<P: SpeedPolicy + ?Sized> SpeedPolicy for Box<P> {
    #[inline]
    fn target_speed_kmh(&self, distance_m: f64) -> f64 {
        (**self).target_speed_kmh(distance_m)
    }
}

// ── ConstantSpeed ─────────────────────────────────────────────────────────────

/// The same target speed on every segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantSpeed(pub f64);

impl SpeedPolicy for ConstantSpeed {
    #[inline]
    fn target_speed_kmh(&self, _distance_m: f64) -> f64 {
        self.0
    }
}
