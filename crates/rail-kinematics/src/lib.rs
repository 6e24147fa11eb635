//! `rail-kinematics`: how long a train takes to cover one segment.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`policy`]     | `SpeedPolicy` trait, `ConstantSpeed`; `SpeedTierTable` impl |
//! | [`profile`]    | `MotionProfile`, `ProfileShape`                           |
//! | [`calculator`] | `KinematicCalculator`                                     |
//!
//! # Motion model
//!
//! Uniform acceleration over the first eighth of the segment up to the cruise
//! speed, constant cruise, then a braking phase sized by the safety margins
//! in [`KinematicsConfig`](rail_core::KinematicsConfig).  Segments too short
//! to cruise fall back to a triangular profile with a reduced peak.
//!
//! Everything is a pure function of `(distance, speed limit, config)`.
//! Degenerate inputs (vanishing accelerating distance or acceleration) are
//! floored to small positive constants and never reported as errors.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on profile types.    |

pub mod calculator;
pub mod policy;
pub mod profile;

#[cfg(test)]
mod tests;

pub use calculator::KinematicCalculator;
pub use policy::{ConstantSpeed, SpeedPolicy};
pub use profile::{MotionProfile, ProfileShape};

/// km/h → m/s.
#[inline]
pub fn kmh_to_mps(kmh: f64) -> f64 {
    kmh / 3.6
}

/// m/s → km/h.
#[inline]
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}
