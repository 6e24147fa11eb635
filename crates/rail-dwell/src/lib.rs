//! `rail-dwell`: how long a train stands at a station.
//!
//! The journey simulator never predicts dwell itself: it asks a
//! [`DwellOracle`] and clamps the answer to the configured floor with
//! [`clamp_dwell`].  How the prediction is produced (a lookup table, a fitted
//! regression, a remote model) is entirely the oracle's business.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`oracle`]    | `DwellOracle` trait, `clamp_dwell`                    |
//! | [`base`]      | `BaseDwell`: the station's own base dwell            |
//! | [`table`]     | `TableDwellOracle`: hourly per-station profiles      |
//! | [`synthetic`] | `SyntheticDwellOracle`: seeded passenger-load model  |
//! | [`error`]     | `OracleError`, `OracleResult<T>`                      |

pub mod base;
pub mod error;
pub mod oracle;
pub mod synthetic;
pub mod table;


pub use base::BaseDwell;
pub use error::{OracleError, OracleResult};
pub use oracle::{DwellOracle, clamp_dwell};
pub use synthetic::SyntheticDwellOracle;
pub use table::TableDwellOracle;
