//! Segment run-time calculator.
//!
//! # Algorithm
//!
//! For a segment of length `d` and a policy cruise speed `v` (already capped
//! at the civil limit):
//!
//! ```text
//!  a_dist   = max(d / divisor, min_accel_distance)
//!  accel    = max(v² / (2 a_dist), min_accel)
//!  t_accel  = v / accel
//!  t_decel  = sqrt(2 margin / accel)          margin = brake (+ buffer)
//!  cruise   = d - a_dist - brake
//!  t_cruise = cruise / v                      if cruise > 0
//! ```
//!
//! When `cruise <= 0` the train has to start braking before it reaches `v`.
//! The reduced peak is reached after a run-up of
//!
//! ```text
//!  run_up = max(d - brake, d * a_dist / (a_dist + brake))
//!  v_peak = sqrt(2 accel run_up)
//! ```
//!
//! and braking from `v_peak` takes `t_decel * v_peak / v`.  At `cruise == 0`
//! the run-up equals `a_dist`, so `v_peak == v` and both branches yield the
//! same profile; below that the run-up is strictly shorter than `a_dist` and
//! the peak strictly lower than `v`.

use rail_core::{KinematicsConfig, RailError, RailResult, SimConfig, SpeedTierTable};

use crate::{kmh_to_mps, MotionProfile, ProfileShape, SpeedPolicy};

// ── KinematicCalculator ───────────────────────────────────────────────────────

/// Pure run-time calculator for single segments.
///
/// Cheap to share: holds only the kinematic margins and the speed policy.
#[derive(Clone, Debug)]
pub struct KinematicCalculator<P: SpeedPolicy = SpeedTierTable> {
    config: KinematicsConfig,
    policy: P,
}

impl KinematicCalculator<SpeedTierTable> {
    /// Calculator using the margins and tier table of `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.kinematics.clone(), config.speed_tiers.clone())
    }
}

impl<P: SpeedPolicy> KinematicCalculator<P> {
    pub fn new(config: KinematicsConfig, policy: P) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Cruise speed in km/h the policy selects for this segment, capped at
    /// `speed_limit_kmh`.
    pub fn target_speed_kmh(&self, distance_m: f64, speed_limit_kmh: f64) -> RailResult<f64> {
        check_inputs(distance_m, speed_limit_kmh)?;
        let wanted = self.policy.target_speed_kmh(distance_m);
        if !wanted.is_finite() || wanted <= 0.0 {
            log::debug!(
                "speed policy returned {wanted} km/h for {distance_m} m; using the civil limit {speed_limit_kmh} km/h"
            );
            return Ok(speed_limit_kmh);
        }
        Ok(wanted.min(speed_limit_kmh))
    }

    /// The tier-selected cruise speed in m/s, as used for headway separation.
    pub fn effective_top_speed_mps(&self, distance_m: f64, speed_limit_kmh: f64) -> RailResult<f64> {
        Ok(kmh_to_mps(self.target_speed_kmh(distance_m, speed_limit_kmh)?))
    }

    /// Seconds to traverse a segment, stop to stop.
    ///
    /// # Errors
    ///
    /// [`RailError::InvalidArgument`] for a negative or non-finite distance
    /// or a non-positive or non-finite speed limit.  Any valid input yields a
    /// finite, non-negative time.
    pub fn compute_runtime(&self, distance_m: f64, speed_limit_kmh: f64) -> RailResult<f64> {
        Ok(self.profile(distance_m, speed_limit_kmh)?.total_time_s())
    }

    /// Full three-phase profile for a segment traversal.
    pub fn profile(&self, distance_m: f64, speed_limit_kmh: f64) -> RailResult<MotionProfile> {
        let vmax_mps = self.effective_top_speed_mps(distance_m, speed_limit_kmh)?;
        if distance_m == 0.0 {
            return Ok(MotionProfile::stationary(vmax_mps));
        }

        let cfg = &self.config;

        let mut accel_distance_m = distance_m / cfg.accel_distance_divisor;
        if !(accel_distance_m >= cfg.min_accel_distance_m) {
            log::debug!(
                "accelerating distance {accel_distance_m} m on a {distance_m} m segment floored to {} m",
                cfg.min_accel_distance_m
            );
            accel_distance_m = cfg.min_accel_distance_m;
        }

        let mut accel_mps2 = vmax_mps * vmax_mps / (2.0 * accel_distance_m);
        if !(accel_mps2 >= cfg.min_accel_mps2) {
            log::debug!(
                "acceleration {accel_mps2} m/s² on a {distance_m} m segment floored to {} m/s²",
                cfg.min_accel_mps2
            );
            accel_mps2 = cfg.min_accel_mps2;
        }

        let ramp = Ramp {
            distance_m,
            vmax_mps,
            accel_distance_m,
            accel_mps2,
            brake_m: cfg.brake_distance_m,
            margin_m: cfg.braking_margin_m(),
        };

        if ramp.cruise_distance_m() > 0.0 {
            Ok(trapezoidal(&ramp))
        } else {
            log::debug!(
                "{distance_m} m segment too short to cruise at {:.2} m/s; triangular profile",
                vmax_mps
            );
            Ok(triangular(&ramp))
        }
    }
}

// ── Profile branches ──────────────────────────────────────────────────────────

/// Inputs shared by both profile branches, after flooring.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Ramp {
    pub distance_m:       f64,
    pub vmax_mps:         f64,
    pub accel_distance_m: f64,
    pub accel_mps2:       f64,
    /// Braking distance alone; decides whether a cruise phase exists.
    pub brake_m:          f64,
    /// Distance the deceleration phase is sized by.
    pub margin_m:         f64,
}

impl Ramp {
    #[inline]
    pub(crate) fn cruise_distance_m(&self) -> f64 {
        self.distance_m - self.accel_distance_m - self.brake_m
    }

    /// Time to brake from `vmax` over the safety margin.
    #[inline]
    fn nominal_decel_time_s(&self) -> f64 {
        (2.0 * self.margin_m / self.accel_mps2).sqrt()
    }
}

pub(crate) fn trapezoidal(r: &Ramp) -> MotionProfile {
    let cruise_m = r.cruise_distance_m().max(0.0);
    MotionProfile {
        distance_m:     r.distance_m,
        vmax_mps:       r.vmax_mps,
        peak_speed_mps: r.vmax_mps,
        accel_mps2:     r.accel_mps2,
        accel_time_s:   r.vmax_mps / r.accel_mps2,
        cruise_time_s:  cruise_m / r.vmax_mps,
        decel_time_s:   r.nominal_decel_time_s(),
        shape:          ProfileShape::Trapezoidal,
    }
}

pub(crate) fn triangular(r: &Ramp) -> MotionProfile {
    let proportional = r.distance_m * r.accel_distance_m / (r.accel_distance_m + r.brake_m);
    let run_up_m = (r.distance_m - r.brake_m).max(proportional).max(0.0);
    let peak_mps = (2.0 * r.accel_mps2 * run_up_m).sqrt().min(r.vmax_mps);
    MotionProfile {
        distance_m:     r.distance_m,
        vmax_mps:       r.vmax_mps,
        peak_speed_mps: peak_mps,
        accel_mps2:     r.accel_mps2,
        accel_time_s:   peak_mps / r.accel_mps2,
        cruise_time_s:  0.0,
        decel_time_s:   r.nominal_decel_time_s() * peak_mps / r.vmax_mps,
        shape:          ProfileShape::Triangular,
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_inputs(distance_m: f64, speed_limit_kmh: f64) -> RailResult<()> {
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(RailError::InvalidArgument(format!(
            "segment distance must be a non-negative number, got {distance_m} m"
        )));
    }
    if !speed_limit_kmh.is_finite() || speed_limit_kmh <= 0.0 {
        return Err(RailError::InvalidArgument(format!(
            "speed limit must be positive, got {speed_limit_kmh} km/h"
        )));
    }
    Ok(())
}
