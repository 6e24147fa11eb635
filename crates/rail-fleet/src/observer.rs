//! Fleet observer trait for progress reporting and data collection.

use rail_journey::TrainRun;

use crate::{FleetTimetable, RunFailure};

/// Callbacks invoked by
/// [`build_fleet_observed`][crate::FleetScheduler::build_fleet_observed] once
/// per spec, in train-id order, after the journeys have been simulated.
///
/// The order is the same with and without the `parallel` feature.  All
/// methods default to no-ops.
///
/// # Example: failure counter
///
/// ```rust,ignore
/// struct CountFailures(usize);
///
/// impl FleetObserver for CountFailures {
///     fn on_run_failed(&mut self, _failure: &RunFailure) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait FleetObserver {
    fn on_run_complete(&mut self, _run: &TrainRun) {}

    fn on_run_failed(&mut self, _failure: &RunFailure) {}

    /// Called once with the finished timetable.
    fn on_fleet_end(&mut self, _timetable: &FleetTimetable) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
