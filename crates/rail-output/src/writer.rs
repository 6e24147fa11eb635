//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TimetableRow, TracePointRow, ViolationRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Each `write_*` call appends; a backend may be fed in several batches.
pub trait OutputWriter {
    /// Append timetable rows.
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()>;

    /// Append headway violation rows.
    fn write_violations(&mut self, rows: &[ViolationRow]) -> OutputResult<()>;

    /// Append time-space trace points.
    fn write_traces(&mut self, rows: &[TracePointRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; later calls are no-ops.
    fn finish(&mut self) -> OutputResult<()>;
}
