//! `rail-fleet`: many trains on one corridor.
//!
//! # Flow
//!
//! ```text
//!  [StartSpec]  ──FleetScheduler::build_fleet──▶  FleetTimetable { runs, failures }
//!     │                    │                               │
//!     │        one JourneySimulator run per spec           └─▶ merged()
//!     └─ StartSpec::uniform(...) for evenly spaced releases
//! ```
//!
//! Runs share only the immutable network, the calculator, and the oracle, so
//! they are independent of each other.  A spec that fails (unknown station,
//! bad direction, …) is recorded as a [`RunFailure`] and never aborts its
//! siblings.  Conflicts between trains are not resolved here; that is the
//! headway analyzer's job.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Simulates journeys on Rayon's thread pool.             |
//! | `serde`    | Derives `Serialize`/`Deserialize` on timetable types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let fleet = FleetBuilder::new(&network, SimConfig::default()).build()?;
//! let specs = StartSpec::uniform("GAIMUKH", Direction::Forward, SimTime::from_hms(5, 0, 0), 300.0, 4);
//! let timetable = fleet.build_fleet(&specs, SimTime::from_hms(23, 0, 0), &BaseDwell);
//! ```

pub mod builder;
pub mod observer;
pub mod scheduler;
pub mod spec;
pub mod timetable;


pub use builder::FleetBuilder;
pub use observer::{FleetObserver, NoopObserver};
pub use scheduler::FleetScheduler;
pub use spec::StartSpec;
pub use timetable::{FleetTimetable, RunFailure};
