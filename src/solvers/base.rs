//! Base stepping trait

use crate::settings::PhysicalParameters;
use crate::state::PendulumState;

/// A fixed-step integration scheme for the damped pendulum
pub trait StepScheme: Send + Sync {
    /// Advance `state` by one step of length `dt`.
    ///
    /// Returns the new state with `elapsed_time` advanced by exactly `dt`.
    /// Never fails; non-finite parameters propagate into the result.
    fn step(&self, state: &PendulumState, params: &PhysicalParameters, dt: f64) -> PendulumState;

    /// Order of the method
    fn order(&self) -> usize;

    /// Human-readable name
    fn name(&self) -> &'static str;
}
