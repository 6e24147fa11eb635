//! `rail-journey`: one train, one service run.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`state`]     | `JourneyState` (at station / in transit)              |
//! | [`timetable`] | `TimetableEntry`, `TrainRun`, `RunEnd`                |
//! | [`simulator`] | `JourneySimulator`                                    |
//!
//! A journey walks from its start station to the terminal of its direction,
//! turns around, and comes back towards the start.  It ends after departing
//! the start again (round trip) or keeps shuttling until the horizon,
//! depending on [`JourneyEnd`](rail_core::JourneyEnd).
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on timetable types.  |

pub mod simulator;
pub mod state;
pub mod timetable;


pub use simulator::JourneySimulator;
pub use state::JourneyState;
pub use timetable::{RunEnd, TimetableEntry, TrainRun};
