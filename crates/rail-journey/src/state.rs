//! Per-train movement state.

use rail_core::{SimTime, StationId};

/// Where a train is during its journey.
///
/// The simulator moves through these states in strict alternation, starting
/// and (normally) ending `AtStation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyState {
    /// Standing at `station` since `since`.  `until` is the departure time,
    /// `None` when the horizon falls during the dwell.
    AtStation {
        station: StationId,
        since:   SimTime,
        until:   Option<SimTime>,
    },
    /// Travelling between two adjacent stations.
    InTransit {
        from:   StationId,
        to:     StationId,
        depart: SimTime,
        arrive: SimTime,
    },
}

impl JourneyState {
    #[inline]
    pub fn is_in_transit(&self) -> bool {
        matches!(self, JourneyState::InTransit { .. })
    }

    /// When this state began.
    pub fn started(&self) -> SimTime {
        match *self {
            JourneyState::AtStation { since, .. } => since,
            JourneyState::InTransit { depart, .. } => depart,
        }
    }

    /// Fraction of the transit completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` when standing at a station or once `now >= arrive`.
    pub fn progress(&self, now: SimTime) -> f64 {
        match *self {
            JourneyState::AtStation { .. } => 1.0,
            JourneyState::InTransit { depart, arrive, .. } => {
                if arrive <= depart {
                    return 1.0;
                }
                let elapsed = now.0.saturating_sub(depart.0) as f64;
                let total = (arrive.0 - depart.0) as f64;
                (elapsed / total).min(1.0)
            }
        }
    }

    /// Position along the line in (fractional) station ordinals at `now`.
    pub fn ordinal_at(&self, now: SimTime) -> f64 {
        match *self {
            JourneyState::AtStation { station, .. } => station.0 as f64,
            JourneyState::InTransit { from, to, .. } => {
                let p = self.progress(now);
                from.0 as f64 + (to.0 as f64 - from.0 as f64) * p
            }
        }
    }
}
