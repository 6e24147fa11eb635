//! The per-train journey state machine.
//!
//! # Walk
//!
//! ```text
//!  origin ──▶ … ──▶ far terminal ──(turnaround)──▶ … ──▶ origin
//! ```
//!
//! At every station call the simulator picks a dwell:
//!
//! | Station                                   | Dwell                        |
//! |-------------------------------------------|------------------------------|
//! | active-direction terminal                 | `turnaround_secs`            |
//! | a line terminal the journey starts at     | `base_dwell_secs`, floored   |
//! | anywhere else                             | oracle answer, floored       |
//!
//! The active-direction terminal is the end of the line on the outbound leg
//! and the origin on the way back.  Between stations the clock advances by
//! the kinematic run time of the segment.
//!
//! # Horizon
//!
//! The horizon check at each station call is the only cancellation point.
//! An arrival past the horizon ends the run without an entry; a departure
//! past the horizon records the entry with `departure = None`.

use rail_core::{Direction, JourneyEnd, RailError, RailResult, SimConfig, SimTime, SpeedTierTable, StationId, TrainId};
use rail_dwell::{DwellOracle, clamp_dwell};
use rail_kinematics::{KinematicCalculator, SpeedPolicy};
use rail_network::{Station, StationNetwork};

use crate::{JourneyState, RunEnd, TimetableEntry, TrainRun};

/// Which way the train is heading relative to its origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Leg {
    Outbound,
    Return,
}

/// Simulates single-train journeys over a shared, immutable network.
///
/// Borrowing everything keeps one simulator cheap to share between Rayon
/// workers; it holds no per-journey state.
pub struct JourneySimulator<'n, P: SpeedPolicy = SpeedTierTable> {
    network:    &'n StationNetwork,
    calculator: &'n KinematicCalculator<P>,
    config:     &'n SimConfig,
}

impl<'n, P: SpeedPolicy> JourneySimulator<'n, P> {
    pub fn new(
        network:    &'n StationNetwork,
        calculator: &'n KinematicCalculator<P>,
        config:     &'n SimConfig,
    ) -> Self {
        Self { network, calculator, config }
    }

    pub fn network(&self) -> &'n StationNetwork {
        self.network
    }

    /// Run one journey.
    ///
    /// # Errors
    ///
    /// - [`RailError::StationOutOfRange`] if `start` is not on the network.
    /// - [`RailError::InvalidArgument`] if `direction` is `Turnaround`, if
    ///   `start` is already the terminal of `direction`, or if
    ///   `horizon <= start_time`.
    /// - [`RailError::Configuration`] if a shuttle journey makes no progress
    ///   on a full lap.
    pub fn simulate<O: DwellOracle + ?Sized>(
        &self,
        train_id:   TrainId,
        start:      StationId,
        direction:  Direction,
        start_time: SimTime,
        horizon:    SimTime,
        oracle:     &O,
    ) -> RailResult<TrainRun> {
        self.simulate_observed(train_id, start, direction, start_time, horizon, oracle, &mut |_| {})
    }

    /// Like [`simulate`](Self::simulate), reporting every state the train
    /// passes through to `on_state`.
    #[allow(clippy::too_many_arguments)]
    pub fn simulate_observed<O: DwellOracle + ?Sized>(
        &self,
        train_id:   TrainId,
        start:      StationId,
        direction:  Direction,
        start_time: SimTime,
        horizon:    SimTime,
        oracle:     &O,
        on_state:   &mut dyn FnMut(&JourneyState),
    ) -> RailResult<TrainRun> {
        let origin = self.network.station(start)?;
        let far = self.check_launch(origin, direction, start_time, horizon)?;

        log::debug!(
            "{train_id}: {direction} from {} at {start_time}, horizon {horizon}",
            origin.name
        );

        let mut run = TrainRun::new(train_id, start, direction, start_time);
        let mut leg = Leg::Outbound;
        let mut heading = direction;
        let mut at = start;
        let mut arrival: Option<SimTime> = None;
        let mut now = start_time;
        let mut last_lap: Option<SimTime> = None;

        loop {
            let station = self.network.station(at)?;
            let active_terminal = match leg {
                Leg::Outbound => far,
                Leg::Return => start,
            };
            let at_terminal = at == active_terminal;

            // ── Dwell ─────────────────────────────────────────────────────
            let dwell_secs = if at_terminal {
                self.config.dwell.turnaround_secs
            } else {
                self.dwell_at(station, now, arrival.is_none(), oracle)
            };
            let tag = if at_terminal && (leg == Leg::Outbound || self.config.journey_end == JourneyEnd::Horizon) {
                Direction::Turnaround
            } else {
                heading
            };

            let mut entry = TimetableEntry {
                train_id,
                station: at,
                arrival,
                departure: None,
                direction: tag,
                dwell_secs,
                departing_peak_kmh: None,
                at: now,
            };

            let departure = now.add_secs(dwell_secs);
            if departure > horizon {
                on_state(&JourneyState::AtStation { station: at, since: now, until: None });
                run.push(entry);
                run.end = RunEnd::Truncated;
                break;
            }
            on_state(&JourneyState::AtStation { station: at, since: now, until: Some(departure) });
            entry.departure = Some(departure);

            // ── Turn or finish ────────────────────────────────────────────
            if at_terminal {
                match (leg, self.config.journey_end) {
                    (Leg::Return, JourneyEnd::RoundTrip) => {
                        run.push(entry);
                        run.end = RunEnd::Completed;
                        break;
                    }
                    (Leg::Outbound, _) => leg = Leg::Return,
                    (Leg::Return, JourneyEnd::Horizon) => {
                        if last_lap.is_some_and(|t| t >= departure) {
                            return Err(RailError::Configuration(format!(
                                "{train_id} makes no progress shuttling from {}; check turnaround and dwell floors",
                                origin.name
                            )));
                        }
                        last_lap = Some(departure);
                        leg = Leg::Outbound;
                    }
                }
                heading = heading.flipped();
            }

            // ── Transit ───────────────────────────────────────────────────
            let next = self.network.next(at, heading).ok_or_else(|| {
                RailError::InvalidArgument(format!(
                    "{train_id} cannot leave {} heading {heading}: end of line",
                    station.name
                ))
            })?;
            let segment = self.network.segment(at, next)?;
            let profile = self.calculator.profile(segment.distance_m, segment.speed_limit_kmh)?;
            entry.departing_peak_kmh = Some(profile.peak_speed_kmh());
            run.push(entry);

            let arrive = departure.add_secs(profile.total_time_s());
            on_state(&JourneyState::InTransit { from: at, to: next, depart: departure, arrive });
            if arrive > horizon {
                run.end = RunEnd::HorizonReached;
                break;
            }

            at = next;
            arrival = Some(arrive);
            now = arrive;
        }

        log::debug!(
            "{train_id}: {} entries, ended {:?} at {}",
            run.len(),
            run.end,
            run.current_time
        );
        Ok(run)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Validate launch arguments and return the far terminal.
    fn check_launch(
        &self,
        origin:     &Station,
        direction:  Direction,
        start_time: SimTime,
        horizon:    SimTime,
    ) -> RailResult<StationId> {
        let far = self.network.terminal(direction).ok_or_else(|| {
            RailError::InvalidArgument(format!(
                "journey direction must be forward or reverse, got {direction}"
            ))
        })?;
        if far == origin.id {
            return Err(RailError::InvalidArgument(format!(
                "cannot start {direction} at {}: it is already the terminal",
                origin.name
            )));
        }
        if horizon <= start_time {
            return Err(RailError::InvalidArgument(format!(
                "horizon {horizon} must be after the start time {start_time}"
            )));
        }
        Ok(far)
    }

    /// Dwell at a station that is not the active terminal.
    fn dwell_at<O: DwellOracle + ?Sized>(
        &self,
        station:  &Station,
        now:      SimTime,
        is_first: bool,
        oracle:   &O,
    ) -> f64 {
        let floor = self.config.dwell.floor_for(&station.name);
        let at_line_end = station.ordinal() == 0 || station.ordinal() == self.network.len() - 1;
        if is_first && at_line_end {
            clamp_dwell(&station.name, Ok(station.base_dwell_secs), floor)
        } else {
            clamp_dwell(&station.name, oracle.predict(station, now.minute_of_day()), floor)
        }
    }
}
