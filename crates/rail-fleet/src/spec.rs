//! Train launch specifications.

use rail_core::{Direction, RailResult, SimTime};

/// Where, which way, and when one train starts.
///
/// The station is referenced by name so specs can come straight from user
/// input; it is resolved against the network when the fleet is built.
#[derive(Clone, Debug, PartialEq)]
pub struct StartSpec {
    pub station:    String,
    pub direction:  Direction,
    pub start_time: SimTime,
}

impl StartSpec {
    pub fn new(station: impl Into<String>, direction: Direction, start_time: SimTime) -> Self {
        Self { station: station.into(), direction, start_time }
    }

    /// Build from text fields, e.g. `("MANPADA", "down", "05:07")`.
    pub fn parse(station: &str, direction: &str, start_time: &str) -> RailResult<Self> {
        Ok(Self::new(station.trim(), direction.parse()?, start_time.parse()?))
    }

    /// `count` trains released from `station` every `headway_secs`, the
    /// first at `first`.
    pub fn uniform(
        station:      &str,
        direction:    Direction,
        first:        SimTime,
        headway_secs: f64,
        count:        usize,
    ) -> Vec<StartSpec> {
        (0..count)
            .map(|i| StartSpec::new(station, direction, first.add_secs(headway_secs * i as f64)))
            .collect()
    }
}
