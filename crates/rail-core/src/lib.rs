//! `rail-core`: foundational types for the rail corridor simulator.
//!
//! This crate is a dependency of every other `rail-*` crate.  It has no
//! `rail-*` dependencies and only `thiserror` (plus optional `serde`) from the
//! outside world.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `StationId`, `TrainId`                                    |
//! | [`time`]        | `SimTime` (milliseconds since service-day midnight)       |
//! | [`direction`]   | `Direction` enum (forward / reverse / turnaround)         |
//! | [`config`]      | `SimConfig`, `KinematicsConfig`, `DwellConfig`, tiers     |
//! | [`error`]       | `RailError`, `RailResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DwellConfig, JourneyEnd, KinematicsConfig, SimConfig, SpeedTier, SpeedTierTable};
pub use direction::Direction;
pub use error::{RailError, RailResult};
pub use ids::{StationId, TrainId};
pub use time::SimTime;
