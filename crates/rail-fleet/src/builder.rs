//! Fluent builder for constructing a [`FleetScheduler`].

use rail_core::{RailResult, SimConfig, SpeedTierTable};
use rail_kinematics::{KinematicCalculator, SpeedPolicy};
use rail_network::StationNetwork;

use crate::FleetScheduler;

/// Fluent builder for [`FleetScheduler<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                            |
/// |----------------------|------------------------------------|
/// | `.speed_policy(p)`   | `config.speed_tiers`               |
///
/// # Example
///
/// ```rust,ignore
/// let fleet = FleetBuilder::new(&network, config)
///     .speed_policy(SpeedTierTable::graded())
///     .build()?;
/// ```
pub struct FleetBuilder<'n, P: SpeedPolicy = SpeedTierTable> {
    network: &'n StationNetwork,
    config:  SimConfig,
    policy:  P,
}

impl<'n> FleetBuilder<'n, SpeedTierTable> {
    pub fn new(network: &'n StationNetwork, config: SimConfig) -> Self {
        let policy = config.speed_tiers.clone();
        Self { network, config, policy }
    }
}

impl<'n, P: SpeedPolicy> FleetBuilder<'n, P> {
    /// Replace the tier table from the config with another policy.
    pub fn speed_policy<Q: SpeedPolicy>(self, policy: Q) -> FleetBuilder<'n, Q> {
        FleetBuilder { network: self.network, config: self.config, policy }
    }

    /// Validate the configuration and return a ready [`FleetScheduler`].
    pub fn build(self) -> RailResult<FleetScheduler<'n, P>> {
        self.config.validate()?;
        let calculator = KinematicCalculator::new(self.config.kinematics.clone(), self.policy);
        Ok(FleetScheduler::new(self.network, self.config, calculator))
    }
}
