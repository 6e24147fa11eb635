//! CSV station loader.
//!
//! # CSV format
//!
//! One row per station.  Rows may appear in any order; `ordinal` fixes the
//! position on the line and must cover `0..N` exactly once.
//!
//! ```csv
//! ordinal,name,distance_to_next_m,base_dwell_secs,civil_speed_kmh
//! 0,GAIMUKH,1502.229,180,35
//! 1,GOWNIWADA,1385.394,30,45
//! 2,KASARVADVALI,,30,45
//! ```
//!
//! `distance_to_next_m` is the length of the segment to ordinal `+1`.  It may
//! be left empty on the last row; a value there is ignored.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rail_core::{RailError, RailResult};

use crate::StationNetwork;

// ── CSV record ────────────────────────────────────────────────────────────────

/// One station row as it appears in the input, before validation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StationRecord {
    pub ordinal:            u32,
    pub name:               String,
    pub distance_to_next_m: Option<f64>,
    pub base_dwell_secs:    f64,
    pub civil_speed_kmh:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`StationNetwork`] from a CSV file.
pub fn load_stations_csv(path: &Path) -> RailResult<StationNetwork> {
    let file = std::fs::File::open(path)?;
    log::debug!("loading stations from {}", path.display());
    load_stations_reader(file)
}

/// Like [`load_stations_csv`] but accepts any `Read` source.
///
/// Malformed rows yield [`RailError::Parse`]; rows that parse but describe an
/// invalid line yield [`RailError::Configuration`].
pub fn load_stations_reader<R: Read>(reader: R) -> RailResult<StationNetwork> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in csv_reader.deserialize::<StationRecord>().enumerate() {
        // Row 1 is the header.
        let record = result.map_err(|e| RailError::Parse(format!("station row {}: {e}", row + 2)))?;
        records.push(record);
    }

    StationNetwork::from_records(records)
}
