//! Fleet scheduler: one independent journey per start spec.

use rail_core::{RailResult, SimConfig, SimTime, SpeedTierTable, TrainId};
use rail_dwell::DwellOracle;
use rail_journey::{JourneySimulator, TrainRun};
use rail_kinematics::{KinematicCalculator, SpeedPolicy};
use rail_network::StationNetwork;

use crate::{FleetObserver, FleetTimetable, NoopObserver, RunFailure, StartSpec};

/// Builds fleets of independent train runs over one network.
///
/// Construct with [`FleetBuilder`](crate::FleetBuilder).
pub struct FleetScheduler<'n, P: SpeedPolicy = SpeedTierTable> {
    network:    &'n StationNetwork,
    config:     SimConfig,
    calculator: KinematicCalculator<P>,
}

impl<'n, P: SpeedPolicy> FleetScheduler<'n, P> {
    pub(crate) fn new(network: &'n StationNetwork, config: SimConfig, calculator: KinematicCalculator<P>) -> Self {
        Self { network, config, calculator }
    }

    pub fn network(&self) -> &'n StationNetwork {
        self.network
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn calculator(&self) -> &KinematicCalculator<P> {
        &self.calculator
    }

    /// Simulate one train per spec and collect the results.
    ///
    /// Train ids are `TrainId(i)` for `specs[i]`.
    pub fn build_fleet<O: DwellOracle + ?Sized>(
        &self,
        specs:   &[StartSpec],
        horizon: SimTime,
        oracle:  &O,
    ) -> FleetTimetable {
        self.build_fleet_observed(specs, horizon, oracle, &mut NoopObserver)
    }

    /// Like [`build_fleet`](Self::build_fleet), reporting each run and
    /// failure to `observer`.
    pub fn build_fleet_observed<O: DwellOracle + ?Sized, Obs: FleetObserver>(
        &self,
        specs:    &[StartSpec],
        horizon:  SimTime,
        oracle:   &O,
        observer: &mut Obs,
    ) -> FleetTimetable {
        let results = self.run_all(specs, horizon, oracle);

        let mut timetable = FleetTimetable::default();
        for (train_id, spec, result) in results {
            match result {
                Ok(run) => {
                    observer.on_run_complete(&run);
                    timetable.runs.push(run);
                }
                Err(error) => {
                    log::warn!(
                        "{train_id} ({} {} at {}) failed: {error}",
                        spec.station, spec.direction, spec.start_time
                    );
                    let failure = RunFailure { train_id, spec: spec.clone(), error };
                    observer.on_run_failed(&failure);
                    timetable.failures.push(failure);
                }
            }
        }

        log::info!(
            "fleet built: {} runs, {} failures, {} timetable entries",
            timetable.runs.len(),
            timetable.failures.len(),
            timetable.entry_count()
        );
        observer.on_fleet_end(&timetable);
        timetable
    }

    /// Resolve `spec` against the network and simulate it.
    pub fn simulate_one<O: DwellOracle + ?Sized>(
        &self,
        train_id: TrainId,
        spec:     &StartSpec,
        horizon:  SimTime,
        oracle:   &O,
    ) -> RailResult<TrainRun> {
        let start = self.network.id_of(&spec.station)?;
        JourneySimulator::new(self.network, &self.calculator, &self.config)
            .simulate(train_id, start, spec.direction, spec.start_time, horizon, oracle)
    }

    // ── Execution ─────────────────────────────────────────────────────────

    /// Results in spec order, with the assigned train ids.
    fn run_all<'s, O: DwellOracle + ?Sized>(
        &self,
        specs:   &'s [StartSpec],
        horizon: SimTime,
        oracle:  &O,
    ) -> Vec<(TrainId, &'s StartSpec, RailResult<TrainRun>)> {
        #[cfg(not(feature = "parallel"))]
        {
            specs
                .iter()
                .enumerate()
                .map(|(i, spec)| {
                    let train_id = TrainId(i as u32);
                    (train_id, spec, self.simulate_one(train_id, spec, horizon, oracle))
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps spec order regardless of completion order.
            specs
                .par_iter()
                .enumerate()
                .map(|(i, spec)| {
                    let train_id = TrainId(i as u32);
                    (train_id, spec, self.simulate_one(train_id, spec, horizon, oracle))
                })
                .collect()
        }
    }
}
