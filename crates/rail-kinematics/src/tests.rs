//! Unit tests for rail-kinematics.

use rail_core::{KinematicsConfig, RailError, SimConfig, SpeedTierTable};

use crate::calculator::{Ramp, trapezoidal, triangular};
use crate::{ConstantSpeed, KinematicCalculator, ProfileShape, SpeedPolicy};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn baseline() -> KinematicCalculator {
    KinematicCalculator::from_config(&SimConfig::default())
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Distance at which `d - d/8 - 150 == 0` with default margins.
const BOUNDARY_M: f64 = 150.0 * 8.0 / 7.0;

// ── Concrete corridor segment ─────────────────────────────────────────────────

#[cfg(test)]
mod gaimukh_gowniwada {
    use super::*;

    #[test]
    fn runtime_matches_reference() {
        let t = baseline().compute_runtime(1_502.229, 45.0).unwrap();
        assert!(close(t, 198.3, 0.5), "runtime {t}");
    }

    #[test]
    fn phases_match_reference() {
        let p = baseline().profile(1_502.229, 45.0).unwrap();
        assert_eq!(p.shape, ProfileShape::Trapezoidal);
        assert!(close(p.vmax_mps, 9.722, 1e-3));
        assert!(close(p.accel_mps2, 0.2517, 1e-4));
        assert!(close(p.accel_time_s, 38.6, 0.1));
        assert!(close(p.decel_time_s, 39.9, 0.1));
        assert!(close(p.cruise_time_s, 119.8, 0.1));
        assert_eq!(p.peak_speed_mps, p.vmax_mps);
    }

    #[test]
    fn average_speed() {
        let p = baseline().profile(1_502.229, 45.0).unwrap();
        assert!(close(p.average_speed_kmh(), 27.3, 0.1), "{}", p.average_speed_kmh());
    }

    #[test]
    fn brake_only_margin_is_faster() {
        let mut cfg = SimConfig::default();
        cfg.kinematics.include_buffer_in_braking = false;
        let brake_only = KinematicCalculator::from_config(&cfg).compute_runtime(1_502.229, 45.0).unwrap();
        let full = baseline().compute_runtime(1_502.229, 45.0).unwrap();
        assert!(brake_only < full);
    }
}

// ── Speed policy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use super::*;

    #[test]
    fn civil_limit_caps_policy() {
        let calc = KinematicCalculator::new(KinematicsConfig::default(), ConstantSpeed(80.0));
        assert_eq!(calc.target_speed_kmh(1_000.0, 45.0).unwrap(), 45.0);
    }

    #[test]
    fn optimized_is_faster_than_baseline() {
        let opt = KinematicCalculator::new(KinematicsConfig::default(), SpeedTierTable::optimized());
        let fast = opt.compute_runtime(1_502.229, 45.0).unwrap();
        let slow = baseline().compute_runtime(1_502.229, 45.0).unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn invalid_policy_output_falls_back_to_limit() {
        let calc = KinematicCalculator::new(KinematicsConfig::default(), ConstantSpeed(f64::NAN));
        assert_eq!(calc.target_speed_kmh(500.0, 40.0).unwrap(), 40.0);
    }

    #[test]
    fn effective_top_speed_is_tier_speed() {
        let v = baseline().effective_top_speed_mps(1_502.229, 45.0).unwrap();
        assert!(close(v, 35.0 / 3.6, 1e-12));
    }

    #[test]
    fn boxed_policy() {
        let p: Box<dyn SpeedPolicy> = Box::new(ConstantSpeed(30.0));
        assert_eq!(p.target_speed_kmh(1.0), 30.0);
    }
}

// ── Edge cases ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn zero_distance_is_zero() {
        let calc = baseline();
        for limit in [1.0, 30.0, 45.0, 120.0] {
            assert_eq!(calc.compute_runtime(0.0, limit).unwrap(), 0.0);
        }
        let p = calc.profile(0.0, 45.0).unwrap();
        assert_eq!(p.shape, ProfileShape::Stationary);
        assert_eq!(p.average_speed_kmh(), 0.0);
    }

    #[test]
    fn non_negative_and_finite_everywhere() {
        let calc = baseline();
        let distances = [1e-9, 1e-3, 0.5, 1.0, 10.0, 100.0, 171.0, 171.5, 200.0, 799.9, 800.0, 5_000.0, 1e6];
        for &d in &distances {
            for &limit in &[0.1, 5.0, 30.0, 45.0, 200.0] {
                let t = calc.compute_runtime(d, limit).unwrap();
                assert!(t.is_finite() && t >= 0.0, "d={d} limit={limit} t={t}");
            }
        }
    }

    #[test]
    fn negative_distance_rejected() {
        assert!(matches!(baseline().compute_runtime(-1.0, 45.0), Err(RailError::InvalidArgument(_))));
        assert!(matches!(baseline().compute_runtime(f64::NAN, 45.0), Err(RailError::InvalidArgument(_))));
    }

    #[test]
    fn non_positive_limit_rejected() {
        assert!(matches!(baseline().compute_runtime(100.0, 0.0), Err(RailError::InvalidArgument(_))));
        assert!(matches!(baseline().compute_runtime(100.0, -5.0), Err(RailError::InvalidArgument(_))));
        assert!(baseline().compute_runtime(0.0, 0.0).is_err());
    }

    /// Vanishing accelerating distance is floored rather than dividing by
    /// zero; the result stays finite.
    #[test]
    fn degenerate_accel_distance_is_floored() {
        let mut cfg = KinematicsConfig::default();
        cfg.accel_distance_divisor = 1e12;
        let calc = KinematicCalculator::new(cfg, SpeedTierTable::baseline());
        let p = calc.profile(10.0, 45.0).unwrap();
        assert!(p.accel_mps2.is_finite());
        assert!(p.total_time_s().is_finite());
    }

    #[test]
    fn degenerate_acceleration_is_floored() {
        let calc = KinematicCalculator::new(KinematicsConfig::default(), ConstantSpeed(1e-9));
        let p = calc.profile(1_000.0, 45.0).unwrap();
        assert!(p.accel_mps2 >= KinematicsConfig::default().min_accel_mps2);
        assert!(p.total_time_s().is_finite());
    }
}

// ── Triangular fallback ───────────────────────────────────────────────────────

#[cfg(test)]
mod triangular_fallback {
    use super::*;

    #[test]
    fn short_segment_never_reaches_vmax() {
        let p = baseline().profile(100.0, 45.0).unwrap();
        assert_eq!(p.shape, ProfileShape::Triangular);
        assert_eq!(p.cruise_time_s, 0.0);
        assert!(p.peak_speed_mps < p.vmax_mps);
        assert!(p.peak_speed_kmh() < 30.0);
    }

    #[test]
    fn peak_strictly_below_vmax_across_short_range() {
        let calc = baseline();
        let mut d = 1.0;
        while d < BOUNDARY_M - 1.0 {
            let p = calc.profile(d, 45.0).unwrap();
            assert!(p.is_triangular(), "d={d}");
            assert!(p.peak_speed_mps < p.vmax_mps, "d={d}");
            d += 5.0;
        }
    }

    #[test]
    fn branches_agree_at_zero_cruise() {
        let r = Ramp {
            distance_m:       175.0,
            vmax_mps:         30.0 / 3.6,
            accel_distance_m: 25.0,
            accel_mps2:       (30.0f64 / 3.6).powi(2) / 50.0,
            brake_m:          150.0,
            margin_m:         200.0,
        };
        assert_eq!(r.cruise_distance_m(), 0.0);
        let trap = trapezoidal(&r);
        let tri = triangular(&r);
        assert!(close(trap.total_time_s(), tri.total_time_s(), 1e-9));
        assert!(close(trap.peak_speed_mps, tri.peak_speed_mps, 1e-9));
        assert!(close(trap.decel_time_s, tri.decel_time_s, 1e-9));
    }

    #[test]
    fn runtime_continuous_across_boundary() {
        let calc = baseline();
        let below = calc.compute_runtime(BOUNDARY_M - 1e-7, 45.0).unwrap();
        let above = calc.compute_runtime(BOUNDARY_M + 1e-7, 45.0).unwrap();
        assert!(close(below, above, 1e-4), "below {below} above {above}");
    }

    #[test]
    fn runtime_grows_with_distance() {
        let calc = baseline();
        let mut prev = 0.0;
        for d in [10.0, 50.0, 100.0, 150.0, 170.0, 180.0, 300.0, 700.0] {
            let t = calc.compute_runtime(d, 45.0).unwrap();
            assert!(t > prev, "d={d}: {t} <= {prev}");
            prev = t;
        }
    }
}
