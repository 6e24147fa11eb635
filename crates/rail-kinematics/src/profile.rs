//! Computed motion profile of one segment traversal.

use crate::mps_to_kmh;

/// Velocity-vs-time shape of a traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfileShape {
    /// Zero-length segment: no movement at all.
    Stationary,
    /// Accelerate, hold the cruise speed, brake.
    Trapezoidal,
    /// Braking begins before the cruise speed is reached.
    Triangular,
}

/// The three phases of a segment traversal.
///
/// Never stored by the simulator; recomputed on every traversal since the
/// physics is deterministic in `(distance, speed limit)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionProfile {
    pub distance_m:     f64,
    /// Cruise speed the policy selected, after the civil cap.
    pub vmax_mps:       f64,
    /// Highest speed actually reached.  Equals `vmax_mps` for trapezoidal
    /// profiles and is strictly lower for triangular ones.
    pub peak_speed_mps: f64,
    pub accel_mps2:     f64,
    pub accel_time_s:   f64,
    pub cruise_time_s:  f64,
    pub decel_time_s:   f64,
    pub shape:          ProfileShape,
}

impl MotionProfile {
    pub(crate) fn stationary(vmax_mps: f64) -> Self {
        Self {
            distance_m:     0.0,
            vmax_mps,
            peak_speed_mps: 0.0,
            accel_mps2:     0.0,
            accel_time_s:   0.0,
            cruise_time_s:  0.0,
            decel_time_s:   0.0,
            shape:          ProfileShape::Stationary,
        }
    }

    #[inline]
    pub fn total_time_s(&self) -> f64 {
        self.accel_time_s + self.cruise_time_s + self.decel_time_s
    }

    /// Mean speed over the traversal in km/h; `0` for a stationary profile.
    pub fn average_speed_kmh(&self) -> f64 {
        let t = self.total_time_s();
        if t > 0.0 { mps_to_kmh(self.distance_m / t) } else { 0.0 }
    }

    #[inline]
    pub fn peak_speed_kmh(&self) -> f64 {
        mps_to_kmh(self.peak_speed_mps)
    }

    #[inline]
    pub fn vmax_kmh(&self) -> f64 {
        mps_to_kmh(self.vmax_mps)
    }

    #[inline]
    pub fn is_triangular(&self) -> bool {
        self.shape == ProfileShape::Triangular
    }
}
