//! Unit tests for rail-network.

use std::io::Cursor;

use rail_core::{Direction, RailError, StationId};

use crate::{StationNetwork, StationNetworkBuilder, StationRecord, load_stations_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three stations, two segments:
///
/// ```text
///  A ──1000 m── B ──500 m── C
///  40 km/h     30 km/h     50 km/h
/// ```
fn three_station() -> StationNetwork {
    let mut b = StationNetworkBuilder::new();
    b.add_station("A", Some(1_000.0), 20.0, 40.0);
    b.add_station("B", Some(500.0), 30.0, 30.0);
    b.add_station("C", None, 25.0, 50.0);
    b.build().unwrap()
}

fn record(ordinal: u32, name: &str, distance: Option<f64>) -> StationRecord {
    StationRecord {
        ordinal,
        name:               name.to_owned(),
        distance_to_next_m: distance,
        base_dwell_secs:    30.0,
        civil_speed_kmh:    45.0,
    }
}

fn config_err(b: StationNetworkBuilder) -> String {
    match b.build() {
        Err(RailError::Configuration(msg)) => msg,
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn counts_and_length() {
        let net = three_station();
        assert_eq!(net.len(), 3);
        assert_eq!(net.segment_count(), 2);
        assert_eq!(net.total_length_m(), 1_500.0);
    }

    #[test]
    fn segment_limit_is_min_of_endpoints() {
        let net = three_station();
        assert_eq!(net.segments()[0].speed_limit_kmh, 30.0);
        assert_eq!(net.segments()[1].speed_limit_kmh, 30.0);
    }

    #[test]
    fn single_station_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("LONELY", None, 30.0, 45.0);
        assert!(config_err(b).contains("at least two"));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(100.0), 30.0, 45.0);
        b.add_station("A", None, 30.0, 45.0);
        assert!(config_err(b).contains("duplicate"));
    }

    #[test]
    fn empty_name_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("  ", Some(100.0), 30.0, 45.0);
        b.add_station("B", None, 30.0, 45.0);
        assert!(config_err(b).contains("empty name"));
    }

    #[test]
    fn missing_distance_names_segment() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(100.0), 30.0, 45.0);
        b.add_station("B", None, 30.0, 45.0);
        b.add_station("C", None, 30.0, 45.0);
        let msg = config_err(b);
        assert!(msg.contains("B -> C"), "{msg}");
    }

    #[test]
    fn negative_distance_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(-1.0), 30.0, 45.0);
        b.add_station("B", None, 30.0, 45.0);
        assert!(config_err(b).contains("A -> B"));
    }

    #[test]
    fn nan_distance_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(f64::NAN), 30.0, 45.0);
        b.add_station("B", None, 30.0, 45.0);
        assert!(b.build().is_err());
    }

    #[test]
    fn zero_civil_speed_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(100.0), 30.0, 0.0);
        b.add_station("B", None, 30.0, 45.0);
        assert!(config_err(b).contains("\"A\""));
    }

    #[test]
    fn negative_dwell_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(100.0), 30.0, 45.0);
        b.add_station("B", None, -3.0, 45.0);
        assert!(config_err(b).contains("\"B\""));
    }

    #[test]
    fn distance_on_last_station_ignored() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(100.0), 30.0, 45.0);
        b.add_station("B", Some(824.707), 30.0, 45.0);
        let net = b.build().unwrap();
        assert_eq!(net.segment_count(), 1);
        assert_eq!(net.total_length_m(), 100.0);
    }

    #[test]
    fn zero_length_segment_allowed() {
        let mut b = StationNetworkBuilder::new();
        b.add_station("A", Some(0.0), 30.0, 45.0);
        b.add_station("B", None, 30.0, 45.0);
        assert_eq!(b.build().unwrap().total_length_m(), 0.0);
    }
}

// ── from_records ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod records {
    use super::*;

    #[test]
    fn unordered_records_are_sorted() {
        let net = StationNetwork::from_records(vec![
            record(2, "C", None),
            record(0, "A", Some(10.0)),
            record(1, "B", Some(20.0)),
        ])
        .unwrap();
        let names: Vec<&str> = net.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(net.cumulative_distance_m(StationId(2)).unwrap(), 30.0);
    }

    #[test]
    fn gap_in_ordinals_rejected() {
        let err = StationNetwork::from_records(vec![
            record(0, "A", Some(10.0)),
            record(2, "C", None),
        ])
        .unwrap_err();
        assert!(matches!(err, RailError::Configuration(_)));
        assert!(err.to_string().contains("non-contiguous"));
    }

    #[test]
    fn repeated_ordinal_rejected() {
        let err = StationNetwork::from_records(vec![
            record(0, "A", Some(10.0)),
            record(0, "B", Some(10.0)),
            record(1, "C", None),
        ])
        .unwrap_err();
        assert!(matches!(err, RailError::Configuration(_)));
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn station_lookup() {
        let net = three_station();
        assert_eq!(net.station(StationId(1)).unwrap().name, "B");
        assert_eq!(net.station_by_name("C").unwrap().id, StationId(2));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let net = three_station();
        let err = net.station_by_name("NOWHERE").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn out_of_range_id() {
        let net = three_station();
        assert!(matches!(
            net.station(StationId(3)),
            Err(RailError::StationOutOfRange { count: 3, .. })
        ));
    }

    #[test]
    fn segment_is_oriented() {
        let net = three_station();
        let fwd = net.segment(StationId(0), StationId(1)).unwrap();
        let rev = net.segment(StationId(1), StationId(0)).unwrap();
        assert_eq!(fwd.distance_m, 1_000.0);
        assert_eq!(rev.distance_m, 1_000.0);
        assert_eq!(rev.from, StationId(1));
        assert_eq!(fwd.direction(), Direction::Forward);
        assert_eq!(rev.direction(), Direction::Reverse);
    }

    #[test]
    fn non_adjacent_segment_rejected() {
        let net = three_station();
        assert!(matches!(
            net.segment(StationId(0), StationId(2)),
            Err(RailError::InvalidArgument(_))
        ));
        assert!(net.segment(StationId(1), StationId(1)).is_err());
    }

    #[test]
    fn terminals_and_neighbours() {
        let net = three_station();
        assert_eq!(net.terminal(Direction::Forward), Some(StationId(2)));
        assert_eq!(net.terminal(Direction::Reverse), Some(StationId(0)));
        assert_eq!(net.terminal(Direction::Turnaround), None);
        assert_eq!(net.next(StationId(0), Direction::Forward), Some(StationId(1)));
        assert_eq!(net.next(StationId(0), Direction::Reverse), None);
        assert_eq!(net.next(StationId(2), Direction::Forward), None);
        assert_eq!(net.next(StationId(1), Direction::Turnaround), None);
    }

    #[test]
    fn chainage() {
        let net = three_station();
        assert_eq!(net.cumulative_distance_m(StationId(0)).unwrap(), 0.0);
        assert_eq!(net.cumulative_distance_m(StationId(1)).unwrap(), 1_000.0);
        assert_eq!(net.cumulative_distance_m(StationId(2)).unwrap(), 1_500.0);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_trailing_empty_distance() {
        let csv = "ordinal,name,distance_to_next_m,base_dwell_secs,civil_speed_kmh\n\
                   0,GAIMUKH,1502.229,180,35\n\
                   1,GOWNIWADA,1385.394,30,45\n\
                   2,KASARVADVALI,,30,45\n";
        let net = load_stations_reader(Cursor::new(csv)).unwrap();
        assert_eq!(net.len(), 3);
        let seg = net.segments()[0];
        assert_eq!(seg.distance_m, 1_502.229);
        assert_eq!(seg.speed_limit_kmh, 35.0);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "ordinal, name, distance_to_next_m, base_dwell_secs, civil_speed_kmh\n\
                   0, A , 100, 30, 45\n\
                   1, B , , 30, 45\n";
        let net = load_stations_reader(Cursor::new(csv)).unwrap();
        assert_eq!(net.station(StationId(0)).unwrap().name, "A");
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "ordinal,name,distance_to_next_m,base_dwell_secs,civil_speed_kmh\n\
                   0,A,far,30,45\n\
                   1,B,,30,45\n";
        let err = load_stations_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RailError::Parse(_)), "{err}");
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn validation_errors_surface_as_configuration() {
        let csv = "ordinal,name,distance_to_next_m,base_dwell_secs,civil_speed_kmh\n\
                   0,A,100,30,45\n";
        let err = load_stations_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RailError::Configuration(_)));
    }
}
