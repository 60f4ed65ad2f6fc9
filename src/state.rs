//! Pendulum state and equations of motion.

use serde::{Deserialize, Serialize};

use crate::settings::PhysicalParameters;

/// Instantaneous state of the pendulum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumState {
    /// Angular displacement from the downward vertical [rad]
    pub angle: f64,

    /// Angular velocity [rad/s]
    pub angular_velocity: f64,

    /// Angular acceleration evaluated at the start of the last step [rad/s^2]
    pub angular_acceleration: f64,

    /// Simulated time [s]
    pub elapsed_time: f64,
}

impl PendulumState {
    /// Pendulum released from rest at `angle`, at time zero
    pub fn at_rest(angle: f64) -> Self {
        Self {
            angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            elapsed_time: 0.0,
        }
    }

    /// Mechanical energy per unit mass
    ///
    /// ```text
    /// E = ½·l²·ω² + g·l·(1 - cos θ)
    /// ```
    pub fn energy(&self, params: &PhysicalParameters) -> f64 {
        let l = params.length;
        0.5 * l * l * self.angular_velocity * self.angular_velocity
            + params.gravity * l * (1.0 - self.angle.cos())
    }
}

/// Angular acceleration of the damped pendulum
///
/// ```text
/// a(θ, ω) = -(g/l)·sin θ - 2·λ·ω
/// ```
#[inline]
pub fn angular_acceleration(params: &PhysicalParameters, angle: f64, velocity: f64) -> f64 {
    -params.omega_squared() * angle.sin() - 2.0 * params.damping * velocity
}
