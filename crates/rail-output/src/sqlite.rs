//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `timetable`, `violations`, and `traces`.  Times are stored as
//! milliseconds after service-day midnight; a missing arrival or departure
//! is `NULL`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, TimetableRow, TracePointRow, ViolationRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS timetable (
                 train_id           INTEGER NOT NULL,
                 station            TEXT    NOT NULL,
                 ordinal            INTEGER NOT NULL,
                 arrival_ms         INTEGER,
                 departure_ms       INTEGER,
                 direction          TEXT    NOT NULL,
                 dwell_secs         REAL    NOT NULL,
                 departing_peak_kmh REAL
             );
             CREATE TABLE IF NOT EXISTS violations (
                 kind              TEXT    NOT NULL,
                 location          TEXT    NOT NULL,
                 train_a           INTEGER NOT NULL,
                 train_b           INTEGER NOT NULL,
                 observed_gap_secs REAL    NOT NULL,
                 required_gap_secs REAL    NOT NULL,
                 at_ms             INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS traces (
                 train_id   INTEGER NOT NULL,
                 time_ms    INTEGER NOT NULL,
                 ordinal    INTEGER NOT NULL,
                 chainage_m REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_timetable(&mut self, rows: &[TimetableRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO timetable \
                 (train_id, station, ordinal, arrival_ms, departure_ms, direction, dwell_secs, departing_peak_kmh) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.train_id.0,
                    row.station,
                    row.ordinal,
                    row.arrival.map(|t| t.0 as i64),
                    row.departure.map(|t| t.0 as i64),
                    row.direction.as_str(),
                    row.dwell_secs,
                    row.departing_peak_kmh,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_violations(&mut self, rows: &[ViolationRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO violations \
                 (kind, location, train_a, train_b, observed_gap_secs, required_gap_secs, at_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.kind,
                    row.location,
                    row.train_a.0,
                    row.train_b.0,
                    row.observed_gap_secs,
                    row.required_gap_secs,
                    row.at.0 as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_traces(&mut self, rows: &[TracePointRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO traces (train_id, time_ms, ordinal, chainage_m) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.train_id.0, row.time.0 as i64, row.ordinal, row.chainage_m])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
