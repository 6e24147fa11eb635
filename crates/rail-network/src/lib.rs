//! `rail-network`: the static corridor topology.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`network`] | `Station`, `Segment`, `StationNetwork`, `StationNetworkBuilder` |
//! | [`loader`]  | `StationRecord`, `load_stations_csv`, `load_stations_reader`  |
//!
//! A `StationNetwork` is built once, validated, and never mutated again.  It
//! is `Send + Sync` and is shared by reference across every concurrently
//! simulated train.

pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use loader::{StationRecord, load_stations_csv, load_stations_reader};
pub use network::{Segment, Station, StationNetwork, StationNetworkBuilder};
