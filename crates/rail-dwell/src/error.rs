use thiserror::Error;

/// Failure reported by a dwell oracle.
///
/// The simulator never propagates these: it logs them and falls back to the
/// dwell floor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OracleError {
    #[error("no dwell data for station {0:?}")]
    UnknownStation(String),

    #[error("dwell oracle unavailable: {0}")]
    Unavailable(String),
}

pub type OracleResult<T> = Result<T, OracleError>;
