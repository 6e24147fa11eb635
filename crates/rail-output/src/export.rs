//! `FleetExport`: turns a fleet's results into rows and feeds a writer.

use rail_analysis::{HeadwayViolation, TimeSpaceTrace};
use rail_fleet::FleetTimetable;
use rail_network::StationNetwork;

use crate::writer::OutputWriter;
use crate::{OutputResult, TimetableRow, TracePointRow, ViolationRow};

/// Number of rows each table received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub timetable_rows: usize,
    pub violation_rows: usize,
    pub trace_rows:     usize,
}

/// Everything one fleet run produced, ready to be written to any
/// [`OutputWriter`] backend.
///
/// Violations and traces are optional; an export without them still creates
/// the (header-only) tables.
pub struct FleetExport<'a> {
    network:    &'a StationNetwork,
    timetable:  &'a FleetTimetable,
    violations: &'a [HeadwayViolation],
    traces:     &'a [TimeSpaceTrace],
}

impl<'a> FleetExport<'a> {
    pub fn new(network: &'a StationNetwork, timetable: &'a FleetTimetable) -> Self {
        Self { network, timetable, violations: &[], traces: &[] }
    }

    pub fn violations(mut self, violations: &'a [HeadwayViolation]) -> Self {
        self.violations = violations;
        self
    }

    pub fn traces(mut self, traces: &'a [TimeSpaceTrace]) -> Self {
        self.traces = traces;
        self
    }

    /// Timetable rows in merged order: event time, then train id.
    pub fn timetable_rows(&self) -> OutputResult<Vec<TimetableRow>> {
        let rows = self
            .timetable
            .merged()
            .into_iter()
            .map(|e| TimetableRow::from_entry(e, self.network))
            .collect::<Result<_, _>>()?;
        Ok(rows)
    }

    pub fn violation_rows(&self) -> Vec<ViolationRow> {
        self.violations
            .iter()
            .map(|v| ViolationRow::from_violation(v, self.network))
            .collect()
    }

    pub fn trace_rows(&self) -> Vec<TracePointRow> {
        self.traces.iter().flat_map(TracePointRow::from_trace).collect()
    }

    /// Write all three tables, then call [`OutputWriter::finish`].
    pub fn write_all<W: OutputWriter + ?Sized>(&self, writer: &mut W) -> OutputResult<ExportSummary> {
        let timetable = self.timetable_rows()?;
        let violations = self.violation_rows();
        let traces = self.trace_rows();

        writer.write_timetable(&timetable)?;
        writer.write_violations(&violations)?;
        writer.write_traces(&traces)?;
        writer.finish()?;

        let summary = ExportSummary {
            timetable_rows: timetable.len(),
            violation_rows: violations.len(),
            trace_rows:     traces.len(),
        };
        log::info!(
            "exported {} timetable rows, {} violations, {} trace points",
            summary.timetable_rows,
            summary.violation_rows,
            summary.trace_rows
        );
        Ok(summary)
    }
}
