//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `timetable.csv`
//! - `violations.csv`
//! - `traces.csv`
//!
//! Times render as `HH:MM:SS`; a missing arrival or departure is an empty
//! field.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use rail_core::SimTime;

use crate::writer::OutputWriter;
use crate::{OutputResult, TimetableRow, TracePointRow, ViolationRow};

pub const TIMETABLE_HEADER: [&str; 7] = [
    "train_id",
    "station",
    "arrival",
    "departure",
    "direction",
    "dwell_secs",
    "departing_peak_kmh",
];

pub const VIOLATIONS_HEADER: [&str; 7] = [
    "kind",
    "location",
    "train_a",
    "train_b",
    "observed_gap_secs",
    "required_gap_secs",
    "at",
];

pub const TRACES_HEADER: [&str; 5] = ["train_id", "time", "time_secs", "ordinal", "chainage_m"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    timetable:  Writer<File>,
    violations: Writer<File>,
    traces:     Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut timetable = Writer::from_path(dir.join("timetable.csv"))?;
        timetable.write_record(TIMETABLE_HEADER)?;

        let mut violations = Writer::from_path(dir.join("violations.csv"))?;
        violations.write_record(VIOLATIONS_HEADER)?;

        let mut traces = Writer::from_path(dir.join("traces.csv"))?;
        traces.write_record(TRACES_HEADER)?;

        Ok(Self {
            timetable,
            violations,
            traces,
            finished: false,
        })
    }
}

fn clock(t: Option<SimTime>) -> String {
    t.map(|t| t.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()> {
        for row in rows {
            self.timetable.write_record(&[
                row.train_id.0.to_string(),
                row.station.clone(),
                clock(row.arrival),
                clock(row.departure),
                row.direction.as_str().to_owned(),
                format!("{:.3}", row.dwell_secs),
                row.departing_peak_kmh.map(|v| format!("{v:.2}")).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_violations(&mut self, rows: &[ViolationRow]) -> OutputResult<()> {
        for row in rows {
            self.violations.write_record(&[
                row.kind.to_owned(),
                row.location.clone(),
                row.train_a.0.to_string(),
                row.train_b.0.to_string(),
                format!("{:.3}", row.observed_gap_secs),
                format!("{:.3}", row.required_gap_secs),
                row.at.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_traces(&mut self, rows: &[TracePointRow]) -> OutputResult<()> {
        for row in rows {
            self.traces.write_record(&[
                row.train_id.0.to_string(),
                row.time.to_string(),
                format!("{:.3}", row.time.as_secs_f64()),
                row.ordinal.to_string(),
                format!("{:.3}", row.chainage_m),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.timetable.flush()?;
        self.violations.flush()?;
        self.traces.flush()?;
        Ok(())
    }
}
