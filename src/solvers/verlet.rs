//! Velocity Verlet method for the pendulum

use super::StepScheme;
use crate::settings::PhysicalParameters;
use crate::state::{angular_acceleration, PendulumState};

/// Velocity Verlet step
///
/// # Mathematical Form
/// ```text
/// a_0     = a(θ_n, ω_n)
/// θ_{n+1} = θ_n + ω_n·h + ½·a_0·h²
/// ω_pred  = ω_n + a_0·h
/// a_1     = a(θ_{n+1}, ω_pred)
/// ω_{n+1} = ω_n + ½·(a_0 + a_1)·h
/// ```
///
/// `a_1` must be evaluated at the updated angle, and the velocity update uses
/// the average of both accelerations. The predicted velocity only enters
/// through the damping term.
///
/// # Characteristics
/// - Order: 2
/// - Stages: 2 acceleration evaluations
/// - Symplectic when undamped; energy error stays bounded
///
/// # References
/// - Swope, W. C., Andersen, H. C., Berens, P. H., & Wilson, K. R. (1982).
///   "A computer simulation method for the calculation of equilibrium
///   constants". J. Chem. Phys. 76, 637.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityVerlet;

impl StepScheme for VelocityVerlet {
    fn step(&self, state: &PendulumState, params: &PhysicalParameters, dt: f64) -> PendulumState {
        let vel = state.angular_velocity;
        let acc = angular_acceleration(params, state.angle, vel);

        let angle = state.angle + vel * dt + 0.5 * acc * dt * dt;
        let vel_predicted = vel + acc * dt;
        let acc_next = angular_acceleration(params, angle, vel_predicted);

        PendulumState {
            angle,
            angular_velocity: vel + 0.5 * (acc + acc_next) * dt,
            angular_acceleration: acc,
            elapsed_time: state.elapsed_time + dt,
        }
    }

    fn order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "Velocity Verlet"
    }
}
