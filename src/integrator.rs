//! Stateful pendulum integrator

use tracing::debug;

use crate::settings::{IntegrationScheme, PhysicalParameters};
use crate::solvers::{scheme_for, StepScheme};
use crate::state::PendulumState;

/// Owns the pendulum state and advances it with the selected scheme
#[derive(Debug, Clone)]
pub struct PendulumIntegrator {
    state: PendulumState,
    params: PhysicalParameters,
    scheme: IntegrationScheme,
}

impl PendulumIntegrator {
    /// Create an integrator with the pendulum at rest at `params.initial_angle`
    pub fn new(params: PhysicalParameters, scheme: IntegrationScheme) -> Self {
        Self {
            state: PendulumState::at_rest(params.initial_angle),
            params,
            scheme,
        }
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Replace the parameters; takes effect on the next step
    pub fn set_parameters(&mut self, params: PhysicalParameters) {
        self.params = params;
    }

    pub fn scheme(&self) -> IntegrationScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: IntegrationScheme) {
        if scheme != self.scheme {
            debug!(from = self.scheme.as_str(), to = scheme.as_str(), "switching scheme");
        }
        self.scheme = scheme;
    }

    /// Order of accuracy of the active scheme
    pub fn order(&self) -> usize {
        scheme_for(self.scheme).order()
    }

    /// Advance one step of length `dt` and return the new state
    pub fn step(&mut self, dt: f64) -> PendulumState {
        self.state = scheme_for(self.scheme).step(&self.state, &self.params, dt);
        self.state
    }

    /// Put the pendulum at `angle` without touching velocity or time
    pub fn hold_angle(&mut self, angle: f64) {
        self.state.angle = angle;
    }

    /// Back to rest at the configured initial angle, time zero
    pub fn reset(&mut self) {
        self.state = PendulumState::at_rest(self.params.initial_angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_starts_at_rest() {
        let params = PhysicalParameters {
            initial_angle: 0.8,
            ..Default::default()
        };
        let integrator = PendulumIntegrator::new(params, IntegrationScheme::Euler);

        assert_eq!(*integrator.state(), PendulumState::at_rest(0.8));
        assert_eq!(integrator.order(), 1);
    }

    #[test]
    fn test_elapsed_time_advances_by_dt_for_both_schemes() {
        for scheme in [IntegrationScheme::Euler, IntegrationScheme::VelocityVerlet] {
            let mut integrator = PendulumIntegrator::new(PhysicalParameters::default(), scheme);
            for _ in 0..10 {
                integrator.step(0.05);
            }
            assert_relative_eq!(integrator.state().elapsed_time, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parameter_change_applies_on_next_step() {
        let mut integrator =
            PendulumIntegrator::new(PhysicalParameters::default(), IntegrationScheme::VelocityVerlet);
        integrator.step(0.01);

        integrator.set_parameters(PhysicalParameters {
            gravity: 0.0,
            damping: 0.0,
            ..Default::default()
        });
        let before = *integrator.state();
        let after = integrator.step(0.01);

        // No gravity, no damping: uniform rotation
        assert_eq!(after.angular_acceleration, 0.0);
        assert_relative_eq!(after.angular_velocity, before.angular_velocity, epsilon = 1e-15);
        assert_relative_eq!(
            after.angle,
            before.angle + before.angular_velocity * 0.01,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_reset_and_hold() {
        let mut integrator =
            PendulumIntegrator::new(PhysicalParameters::default(), IntegrationScheme::VelocityVerlet);
        for _ in 0..50 {
            integrator.step(0.01666);
        }
        integrator.reset();
        assert_eq!(*integrator.state(), PendulumState::at_rest(1.57));

        integrator.hold_angle(0.3);
        assert_eq!(integrator.state().angle, 0.3);
        assert_eq!(integrator.state().elapsed_time, 0.0);
    }

    #[test]
    fn test_zero_length_propagates_non_finite() {
        let params = PhysicalParameters {
            length: 0.0,
            ..Default::default()
        };
        let mut integrator = PendulumIntegrator::new(params, IntegrationScheme::Euler);
        let state = integrator.step(0.01);

        assert!(!state.angle.is_finite());
    }
}
