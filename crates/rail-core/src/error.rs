//! Simulator error type.
//!
//! Sub-crates either return `RailError` directly or wrap it as one variant of
//! their own enum (see `rail-output`).  Messages always name the offending
//! station or segment so a failed run can be diagnosed from the log alone.

use thiserror::Error;

use crate::StationId;

/// The error taxonomy shared by all `rail-*` crates.
///
/// Numerical degeneracies inside the kinematic model and misbehaving dwell
/// oracles are *not* represented here: both are recovered where they occur.
#[derive(Debug, Error)]
pub enum RailError {
    /// Malformed or inconsistent static input (network, config).  Fatal.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("station {0:?} not found")]
    StationNotFound(String),

    #[error("station {id} out of range (network has {count} stations)")]
    StationOutOfRange { id: StationId, count: usize },

    /// Bad direction tag, non-positive horizon, malformed time input, …
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RailError {
    /// `true` for both flavours of unknown-station error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RailError::StationNotFound(_) | RailError::StationOutOfRange { .. })
    }
}

/// Shorthand result type for all `rail-*` crates.
pub type RailResult<T> = Result<T, RailError>;
