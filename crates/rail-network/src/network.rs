//! Station network representation and builder.
//!
//! # Data layout
//!
//! Stations are stored in ordinal order, so `StationId(i)` indexes
//! `stations[i]` directly.  The segment joining ordinals `i` and `i + 1` is
//! `segments[i]`; there are always exactly `stations.len() - 1` of them.
//!
//! ```text
//!  stations:   S0 ──── S1 ──── S2 ── … ── S(n-1)
//!  segments:      seg0    seg1     …  seg(n-2)
//!  chainage:   0      d0     d0+d1    …   total
//! ```
//!
//! The record of the last station may carry a `distance_to_next` value in the
//! source data; it describes no segment and is discarded at build time.

use std::collections::HashMap;

use rail_core::{Direction, RailError, RailResult, StationId};

use crate::StationRecord;

// ── Station / Segment ─────────────────────────────────────────────────────────

/// One stop on the line.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    /// Ordinal position on the line.
    pub id: StationId,
    /// Unique within the network.
    pub name: String,
    /// Externally imposed maximum speed around this station, km/h.
    pub civil_speed_kmh: f64,
    /// Dwell used when no oracle is consulted, seconds.
    pub base_dwell_secs: f64,
}

impl Station {
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.id.index()
    }
}

/// The stretch of track between two adjacent stations, oriented `from → to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from:            StationId,
    pub to:              StationId,
    pub distance_m:      f64,
    /// `min` of the two endpoint stations' civil speeds, km/h.
    pub speed_limit_kmh: f64,
}

impl Segment {
    /// The same stretch of track traversed the other way.
    #[inline]
    pub fn reversed(self) -> Segment {
        Segment { from: self.to, to: self.from, ..self }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        if self.to > self.from { Direction::Forward } else { Direction::Reverse }
    }
}

// ── StationNetwork ────────────────────────────────────────────────────────────

/// Immutable, validated corridor topology.
///
/// Do not construct directly; use [`StationNetworkBuilder`] or
/// [`StationNetwork::from_records`].
#[derive(Clone, Debug)]
pub struct StationNetwork {
    stations: Vec<Station>,
    /// `segments[i]` joins ordinal `i` to ordinal `i + 1`.
    segments: Vec<Segment>,
    /// Cumulative distance from ordinal 0 to each station, metres.
    chainage_m: Vec<f64>,
    by_name: HashMap<String, StationId>,
}

impl StationNetwork {
    /// Validate `records` and build a network.  Records may arrive in any
    /// order; their ordinals must cover `0..N` exactly once.
    pub fn from_records(records: Vec<StationRecord>) -> RailResult<Self> {
        let mut b = StationNetworkBuilder::with_capacity(records.len());
        for r in records {
            b.add_record(r);
        }
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of stations (always ≥ 2).
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always `false` for a built network; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Segments in forward orientation, ordinal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Length of the whole line, metres.
    pub fn total_length_m(&self) -> f64 {
        self.chainage_m.last().copied().unwrap_or(0.0)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn station(&self, id: StationId) -> RailResult<&Station> {
        self.stations.get(id.index()).ok_or(RailError::StationOutOfRange {
            id,
            count: self.stations.len(),
        })
    }

    pub fn station_by_name(&self, name: &str) -> RailResult<&Station> {
        let id = self.id_of(name)?;
        Ok(&self.stations[id.index()])
    }

    pub fn id_of(&self, name: &str) -> RailResult<StationId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RailError::StationNotFound(name.to_owned()))
    }

    /// The segment between two *adjacent* stations, oriented `from → to`.
    pub fn segment(&self, from: StationId, to: StationId) -> RailResult<Segment> {
        self.station(from)?;
        self.station(to)?;
        if to.0 == from.0 + 1 {
            Ok(self.segments[from.index()])
        } else if from.0 == to.0 + 1 {
            Ok(self.segments[to.index()].reversed())
        } else {
            Err(RailError::InvalidArgument(format!(
                "stations {} and {} are not adjacent",
                self.stations[from.index()].name,
                self.stations[to.index()].name,
            )))
        }
    }

    /// Cumulative distance from ordinal 0, metres.
    pub fn cumulative_distance_m(&self, id: StationId) -> RailResult<f64> {
        self.station(id)?;
        Ok(self.chainage_m[id.index()])
    }

    // ── Line geometry ─────────────────────────────────────────────────────

    /// The last station reached when travelling in `direction`.
    ///
    /// `Turnaround` has no terminal of its own and returns `None`.
    pub fn terminal(&self, direction: Direction) -> Option<StationId> {
        match direction {
            Direction::Forward    => Some(StationId((self.stations.len() - 1) as u32)),
            Direction::Reverse    => Some(StationId(0)),
            Direction::Turnaround => None,
        }
    }

    /// The neighbour of `id` in `direction`, or `None` past either end.
    pub fn next(&self, id: StationId, direction: Direction) -> Option<StationId> {
        let next = id.0 as i64 + direction.step();
        if direction.is_travel() && next >= 0 && (next as usize) < self.stations.len() {
            Some(StationId(next as u32))
        } else {
            None
        }
    }
}

// ── StationNetworkBuilder ─────────────────────────────────────────────────────

/// Collect station records, then [`build`](Self::build) a validated
/// [`StationNetwork`].
///
/// # Example
///
/// ```
/// use rail_network::StationNetworkBuilder;
///
/// let mut b = StationNetworkBuilder::new();
/// b.add_station("GAIMUKH", Some(1_502.229), 180.0, 35.0);
/// b.add_station("GOWNIWADA", None, 30.0, 45.0);
/// let net = b.build().unwrap();
/// assert_eq!(net.len(), 2);
/// assert_eq!(net.segments()[0].speed_limit_kmh, 35.0);
/// ```
pub struct StationNetworkBuilder {
    records: Vec<StationRecord>,
}

impl StationNetworkBuilder {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn with_capacity(stations: usize) -> Self {
        Self { records: Vec::with_capacity(stations) }
    }

    /// Append a station at the next ordinal and return its id.
    ///
    /// `distance_to_next_m` is the length of the segment to the station added
    /// after this one; pass `None` for the last station.
    pub fn add_station(
        &mut self,
        name:               &str,
        distance_to_next_m: Option<f64>,
        base_dwell_secs:    f64,
        civil_speed_kmh:    f64,
    ) -> StationId {
        let id = StationId(self.records.len() as u32);
        self.records.push(StationRecord {
            ordinal: id.0,
            name: name.to_owned(),
            distance_to_next_m,
            base_dwell_secs,
            civil_speed_kmh,
        });
        id
    }

    /// Append a record with an explicit ordinal (as read from a file).
    pub fn add_record(&mut self, record: StationRecord) {
        self.records.push(record);
    }

    pub fn station_count(&self) -> usize {
        self.records.len()
    }

    /// Consume the builder, validate every record, and produce a
    /// [`StationNetwork`].
    ///
    /// # Errors
    ///
    /// [`RailError::Configuration`] naming the offending station or segment
    /// for: fewer than two stations, non-contiguous ordinals, empty or
    /// duplicate names, non-positive civil speed, negative base dwell, and a
    /// missing, negative, or non-finite distance on any non-last station.
    pub fn build(self) -> RailResult<StationNetwork> {
        let mut records = self.records;
        if records.len() < 2 {
            return Err(RailError::Configuration(format!(
                "a network needs at least two stations (one segment), got {}",
                records.len()
            )));
        }

        records.sort_by_key(|r| r.ordinal);
        for (expected, r) in records.iter().enumerate() {
            if r.ordinal as usize != expected {
                return Err(RailError::Configuration(format!(
                    "non-contiguous ordinals: expected {expected}, found {} at station {:?}",
                    r.ordinal, r.name
                )));
            }
        }

        // ── Stations ──────────────────────────────────────────────────────
        let mut stations = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());
        for r in &records {
            let name = r.name.trim();
            if name.is_empty() {
                return Err(RailError::Configuration(format!(
                    "station at ordinal {} has an empty name",
                    r.ordinal
                )));
            }
            if !r.civil_speed_kmh.is_finite() || r.civil_speed_kmh <= 0.0 {
                return Err(RailError::Configuration(format!(
                    "station {name:?} has non-positive civil speed {} km/h",
                    r.civil_speed_kmh
                )));
            }
            if !r.base_dwell_secs.is_finite() || r.base_dwell_secs < 0.0 {
                return Err(RailError::Configuration(format!(
                    "station {name:?} has negative base dwell {} s",
                    r.base_dwell_secs
                )));
            }
            let id = StationId(r.ordinal);
            if by_name.insert(name.to_owned(), id).is_some() {
                return Err(RailError::Configuration(format!("duplicate station name {name:?}")));
            }
            stations.push(Station {
                id,
                name: name.to_owned(),
                civil_speed_kmh: r.civil_speed_kmh,
                base_dwell_secs: r.base_dwell_secs,
            });
        }

        // ── Segments + chainage ───────────────────────────────────────────
        let mut segments = Vec::with_capacity(stations.len() - 1);
        let mut chainage_m = Vec::with_capacity(stations.len());
        chainage_m.push(0.0);
        for pair in stations.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let distance_m = match records[a.ordinal()].distance_to_next_m {
                Some(d) if d.is_finite() && d >= 0.0 => d,
                Some(d) => {
                    return Err(RailError::Configuration(format!(
                        "segment {} -> {} has invalid distance {d} m",
                        a.name, b.name
                    )));
                }
                None => {
                    return Err(RailError::Configuration(format!(
                        "segment {} -> {} has no distance",
                        a.name, b.name
                    )));
                }
            };
            segments.push(Segment {
                from: a.id,
                to: b.id,
                distance_m,
                speed_limit_kmh: a.civil_speed_kmh.min(b.civil_speed_kmh),
            });
            let last = chainage_m[chainage_m.len() - 1];
            chainage_m.push(last + distance_m);
        }

        if let Some(last) = records.last()
            && last.distance_to_next_m.is_some()
        {
            log::debug!(
                "ignoring distance_to_next on terminal station {:?}; it describes no segment",
                last.name
            );
        }

        let network = StationNetwork { stations, segments, chainage_m, by_name };
        log::info!(
            "station network built: {} stations, {} segments, {:.1} m",
            network.len(),
            network.segment_count(),
            network.total_length_m()
        );
        Ok(network)
    }
}

impl Default for StationNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
