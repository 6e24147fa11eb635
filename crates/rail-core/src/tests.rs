//! Unit tests for rail-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, TrainId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(9);
        assert_eq!(id.index(), 9);
        assert_eq!(StationId::try_from(9usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(TrainId::default(), TrainId::INVALID);
        assert_eq!(StationId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TrainId(3).to_string(), "TrainId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{RailError, SimTime};

    #[test]
    fn parse_hh_mm() {
        assert_eq!(SimTime::parse("05:00").unwrap(), SimTime::from_hms(5, 0, 0));
        assert_eq!(SimTime::parse("05:07").unwrap().0, (5 * 3600 + 7 * 60) * 1000);
    }

    #[test]
    fn parse_hh_mm_ss() {
        assert_eq!(SimTime::parse("23:59:59").unwrap(), SimTime::from_hms(23, 59, 59));
        assert_eq!("07:30:15".parse::<SimTime>().unwrap(), SimTime::from_hms(7, 30, 15));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "5", "5:", "05:60", "05:00:61", "aa:bb", "05:00:00:00", "-1:00"] {
            let err = SimTime::parse(bad).unwrap_err();
            assert!(matches!(err, RailError::InvalidArgument(_)), "{bad:?} gave {err}");
        }
    }

    #[test]
    fn display_pads_and_does_not_wrap() {
        assert_eq!(SimTime::from_hms(5, 3, 9).to_string(), "05:03:09");
        assert_eq!(SimTime::from_hms(25, 10, 0).to_string(), "25:10:00");
    }

    #[test]
    fn add_secs_rounds_to_millis() {
        let t = SimTime::from_hms(5, 0, 0).add_secs(198.2736);
        assert_eq!(t.0, 5 * 3_600_000 + 198_274);
    }

    #[test]
    fn add_secs_never_goes_backwards() {
        let t = SimTime::from_hms(5, 0, 0);
        assert_eq!(t.add_secs(-10.0), t);
        assert_eq!(t.add_secs(f64::NAN), t);
    }

    #[test]
    fn secs_since_is_signed() {
        let a = SimTime::from_hms(5, 0, 0);
        let b = SimTime::from_hms(5, 1, 30);
        assert_eq!(b.secs_since(a), 90.0);
        assert_eq!(a.secs_since(b), -90.0);
    }

    #[test]
    fn minute_of_day_wraps() {
        assert_eq!(SimTime::from_hms(8, 15, 59).minute_of_day(), 8 * 60 + 15);
        assert_eq!(SimTime::from_hms(24, 1, 0).minute_of_day(), 1);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, RailError};

    #[test]
    fn parse_aliases() {
        assert_eq!("forward".parse::<Direction>().unwrap(), Direction::Forward);
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Forward);
        assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Reverse);
        assert_eq!("turnaround".parse::<Direction>().unwrap(), Direction::Turnaround);
    }

    #[test]
    fn parse_unknown_is_invalid_argument() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert!(matches!(err, RailError::InvalidArgument(_)));
    }

    #[test]
    fn flip_and_step() {
        assert_eq!(Direction::Forward.flipped(), Direction::Reverse);
        assert_eq!(Direction::Reverse.flipped(), Direction::Forward);
        assert_eq!(Direction::Forward.step(), 1);
        assert_eq!(Direction::Reverse.step(), -1);
        assert!(!Direction::Turnaround.is_travel());
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Reverse.to_string(), "reverse");
    }
}

#[cfg(test)]
mod config {
    use crate::{JourneyEnd, RailError, SimConfig, SpeedTier, SpeedTierTable};

    #[test]
    fn defaults_validate() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn default_margins() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.kinematics.braking_margin_m(), 200.0);
        assert_eq!(cfg.dwell.turnaround_secs, 180.0);
        assert_eq!(cfg.dwell.default_floor_secs, 15.0);
    }

    #[test]
    fn brake_only_margin() {
        let mut cfg = SimConfig::default();
        cfg.kinematics.include_buffer_in_braking = false;
        assert_eq!(cfg.kinematics.braking_margin_m(), 150.0);
    }

    #[test]
    fn station_floor_overrides_default() {
        let mut cfg = SimConfig::default();
        cfg.dwell.station_floors.insert("MANPADA".into(), 45.0);
        assert_eq!(cfg.dwell.floor_for("MANPADA"), 45.0);
        assert_eq!(cfg.dwell.floor_for("KAPURBAWDI"), 15.0);
    }

    #[test]
    fn baseline_tiers() {
        let t = SpeedTierTable::baseline();
        assert_eq!(t.lookup_kmh(500.0), 30.0);
        assert_eq!(t.lookup_kmh(1_502.229), 35.0);
    }

    #[test]
    fn conditional_tiers_fall_back_to_default_in_gaps() {
        let t = SpeedTierTable::conditional();
        assert_eq!(t.lookup_kmh(850.0), 30.0);
        assert_eq!(t.lookup_kmh(1_000.0), 30.0); // gap 900–1100
        assert_eq!(t.lookup_kmh(1_150.0), 33.0);
        assert_eq!(t.lookup_kmh(1_225.0), 30.0); // gap 1200–1250
        assert_eq!(t.lookup_kmh(1_385.0), 35.0);
    }

    #[test]
    fn graded_tiers() {
        let t = SpeedTierTable::graded();
        assert_eq!(t.lookup_kmh(1_024.0), 36.0);
        assert_eq!(t.lookup_kmh(1_453.0), 38.0);
    }

    #[test]
    fn negative_margin_rejected() {
        let mut cfg = SimConfig::default();
        cfg.kinematics.brake_distance_m = -1.0;
        assert!(matches!(cfg.validate(), Err(RailError::Configuration(_))));
    }

    #[test]
    fn empty_tier_range_rejected() {
        let mut cfg = SimConfig::default();
        cfg.speed_tiers.tiers.push(SpeedTier::new(900.0, Some(900.0), 30.0));
        assert!(matches!(cfg.validate(), Err(RailError::Configuration(_))));
    }

    #[test]
    fn horizon_mode_needs_positive_turnaround() {
        let mut cfg = SimConfig::default();
        cfg.journey_end = JourneyEnd::Horizon;
        cfg.dwell.turnaround_secs = 0.0;
        assert!(cfg.validate().is_err());
        cfg.journey_end = JourneyEnd::RoundTrip;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_station_floor_rejected() {
        let mut cfg = SimConfig::default();
        cfg.dwell.station_floors.insert("GAIMUKH".into(), -5.0);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("GAIMUKH"));
    }
}

#[cfg(all(test, feature = "serde"))]
mod json {
    use crate::{Direction, JourneyEnd, SimConfig};

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: SimConfig = serde_json::from_str(
            r#"{ "kinematics": { "include_buffer_in_braking": false },
                 "dwell": { "station_floors": { "GAIMUKH": 60.0 } },
                 "journey_end": "horizon" }"#,
        )
        .unwrap();
        assert!(!cfg.kinematics.include_buffer_in_braking);
        assert_eq!(cfg.kinematics.brake_distance_m, 150.0);
        assert_eq!(cfg.dwell.floor_for("GAIMUKH"), 60.0);
        assert_eq!(cfg.dwell.floor_for("MANPADA"), 15.0);
        assert_eq!(cfg.journey_end, JourneyEnd::Horizon);
        assert_eq!(cfg.speed_tiers.lookup_kmh(1_000.0), 35.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn direction_is_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Turnaround).unwrap(), "\"turnaround\"");
    }
}
