//! Simulation constants and defaults

/// Default gravitational acceleration [m/s^2]
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Default pendulum length [m]
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Default damping coefficient [1/s]
pub const DEFAULT_DAMPING: f64 = 0.0;

/// Default fixed timestep, roughly one 60 Hz frame [s]
pub const DEFAULT_TIMESTEP: f64 = 0.01666;

/// Default release angle [rad]
pub const DEFAULT_INITIAL_ANGLE: f64 = 1.57;

/// Default number of samples retained per trace
pub const DEFAULT_HISTORY_CAPACITY: usize = 2000;

/// Damping below this value is treated as an undamped pendulum
pub const DAMPING_TOLERANCE: f64 = 1e-4;
