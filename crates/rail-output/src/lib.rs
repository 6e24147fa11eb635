//! `rail-output`: output writers for the rail corridor simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                      |
//! |-----------|---------|----------------------------------------------------|
//! | *(none)*  | CSV     | `timetable.csv`, `violations.csv`, `traces.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                                        |
//!
//! Both implement [`OutputWriter`] and are usually driven by
//! [`FleetExport`], which builds the rows from a fleet timetable, its
//! headway violations, and its time-space traces.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rail_output::{CsvWriter, FleetExport};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! FleetExport::new(&network, &timetable)
//!     .violations(&violations)
//!     .traces(&traces)
//!     .write_all(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{ExportSummary, FleetExport};
pub use row::{TimetableRow, TracePointRow, ViolationRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
