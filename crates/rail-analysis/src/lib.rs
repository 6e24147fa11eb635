//! `rail-analysis`: what to make of a fleet timetable.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`headway`] | `HeadwayAnalyzer`, `HeadwayViolation`, `Location`            |
//! | [`trace`]   | `TraceBuilder`, `TimeSpaceTrace`, `TracePoint`, `Transit`, `SegmentMarker` |
//!
//! Both are read-only over the timetable.  The headway check is advisory:
//! violations are returned as data and nothing is corrected.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the occupancy index.      |

pub mod headway;
pub mod trace;


pub use headway::{HeadwayAnalyzer, HeadwayViolation, Location};
pub use trace::{SegmentMarker, TimeSpaceTrace, TraceBuilder, TracePoint, Transit};
