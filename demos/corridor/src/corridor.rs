//! The Gaimukh – Cadbury Junction corridor and its morning fleet.

use std::io::Cursor;

use rail_core::{Direction, RailResult, SimTime};
use rail_fleet::StartSpec;
use rail_network::{StationNetwork, load_stations_reader};

/// Ten stations, distances to the next station in metres.  The two line
/// ends hold trains for 180 s on launch; GAIMUKH has a 35 km/h civil limit.
const STATIONS_CSV: &str = "\
ordinal,name,distance_to_next_m,base_dwell_secs,civil_speed_kmh\n\
0,GAIMUKH,1502.229,180,35\n\
1,GOWNIWADA,1385.394,30,45\n\
2,KASARVADVALI,1024.036,30,45\n\
3,VIJAYGARDEN,1198.778,30,45\n\
4,DONGARI PADA,1226.694,30,45\n\
5,TIKUJI NI WADI,758.992,30,45\n\
6,MANPADA,815.824,30,45\n\
7,KAPURBAWDI,1453.707,30,45\n\
8,MAJIWADA,824.707,30,45\n\
9,CADBURY JUNCTION,,180,45\n\
";

pub const FIRST_STATION: &str = "GAIMUKH";
pub const LAST_STATION: &str = "CADBURY JUNCTION";
pub const MID_STATION: &str = "KAPURBAWDI";

pub fn build_network() -> RailResult<StationNetwork> {
    load_stations_reader(Cursor::new(STATIONS_CSV))
}

/// The first departures of the day:
///
/// - three trains from GAIMUKH, five minutes apart;
/// - two from CADBURY JUNCTION at 05:00 and 05:07;
/// - one each way from KAPURBAWDI at 05:00.
pub fn morning_fleet() -> Vec<StartSpec> {
    let five = SimTime::from_hms(5, 0, 0);
    let mut specs = StartSpec::uniform(FIRST_STATION, Direction::Forward, five, 300.0, 3);
    specs.push(StartSpec::new(LAST_STATION, Direction::Reverse, five));
    specs.push(StartSpec::new(LAST_STATION, Direction::Reverse, SimTime::from_hms(5, 7, 0)));
    specs.push(StartSpec::new(MID_STATION, Direction::Forward, five));
    specs.push(StartSpec::new(MID_STATION, Direction::Reverse, five));
    specs
}
