use crate::error::{SupplyError, SupplyResult};
use std::time::Duration;

/// Converts simulated time units into wall-clock waits.
///
/// Every delay in the simulation (handling one item, travelling, running a
/// pasteurization programme) is expressed in time units; the pace decides how
/// long one unit really is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pace {
    time_unit: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Pace {
    pub fn new(time_unit: Duration) -> Self {
        Self { time_unit }
    }

    pub fn time_unit(&self) -> Duration {
        self.time_unit
    }

    /// Wait for `units` time units. Fails when the wait is negative, not
    /// finite, or longer than a `Duration` can hold.
    pub fn units(&self, units: f64) -> SupplyResult<Duration> {
        Duration::try_from_secs_f64(units * self.time_unit.as_secs_f64())
            .map_err(|_| SupplyError::DelayOutOfRange(units))
    }

    /// Loading or unloading a single item takes one time unit.
    pub fn item_handling(&self) -> Duration {
        self.time_unit
    }

    /// Travel time for `distance` at `speed`.
    pub fn travel(&self, distance: f64, speed: f64) -> SupplyResult<Duration> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(SupplyError::InvalidDistance(distance));
        }
        self.units(distance / speed)
    }
}
