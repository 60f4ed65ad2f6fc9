//! Euler method for the pendulum

use super::StepScheme;
use crate::settings::PhysicalParameters;
use crate::state::{angular_acceleration, PendulumState};

/// Explicit Euler step
///
/// # Mathematical Form
/// ```text
/// a_n     = a(θ_n, ω_n)
/// ω_{n+1} = ω_n + a_n·h
/// θ_{n+1} = θ_n + ω_{n+1}·h
/// ```
///
/// # Characteristics
/// - Order: 1
/// - Stages: 1
/// - Explicit, fixed timestep
///
/// # Note
/// The angle update uses the freshly updated velocity. The energy error is
/// first order in `h`, against second order for [`VelocityVerlet`](super::VelocityVerlet).
/// Kept as the baseline the Verlet scheme is compared against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl StepScheme for Euler {
    fn step(&self, state: &PendulumState, params: &PhysicalParameters, dt: f64) -> PendulumState {
        let acc = angular_acceleration(params, state.angle, state.angular_velocity);
        let vel = state.angular_velocity + acc * dt;
        let angle = state.angle + vel * dt;

        PendulumState {
            angle,
            angular_velocity: vel,
            angular_acceleration: acc,
            elapsed_time: state.elapsed_time + dt,
        }
    }

    fn order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Euler"
    }
}
