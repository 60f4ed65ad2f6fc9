//! pendulum-sim - Fixed-step damped pendulum simulation
//!
//! Integrates the damped simple pendulum with either explicit Euler or
//! velocity Verlet, measures the period from ascending zero crossings and
//! compares it against the Huygens and elliptic-integral periods.
//!
//! # Architecture
//!
//! - [`RingBuffer`]: fixed-capacity trace history, iterated oldest first
//! - [`PeriodEstimator`]: zero-crossing period measurement
//! - [`period`]: Huygens and elliptic-integral periods
//! - [`PendulumIntegrator`]: owns the state and steps it with a [`StepScheme`]
//! - [`SimulationController`]: run state and per-tick orchestration for a
//!   front end
//!
//! Everything is single-threaded and synchronous. A front end calls
//! [`SimulationController::tick`] once per frame and reads the results.
//!
//! # Example
//!
//! ```rust
//! use pendulum_sim::prelude::*;
//!
//! let mut sim = SimulationController::new(PhysicalParameters {
//!     initial_angle: 0.3,
//!     ..Default::default()
//! });
//! sim.set_scheme(IntegrationScheme::VelocityVerlet);
//! sim.play();
//!
//! let dt = sim.parameters().dt;
//! for _ in 0..1000 {
//!     sim.tick(dt);
//! }
//!
//! let report = sim.periods();
//! assert!(report.measured.is_some());
//! ```

pub mod buffer;
pub mod controller;
pub mod export;
pub mod integrator;
pub mod period;
pub mod settings;
pub mod solvers;
pub mod state;
pub mod utils;

pub use buffer::{RingBuffer, Sample};
pub use controller::{AngleExtremes, RunState, SimulationController, Snapshot, Traces};
pub use export::ExportError;
pub use integrator::PendulumIntegrator;
pub use period::{ExactPeriod, PeriodEstimator, PeriodMeasurement, PeriodReport};
pub use settings::{
    ConfigError, IntegrationScheme, ParameterError, PhysicalParameters, SimulationConfig,
};
pub use solvers::StepScheme;
pub use state::PendulumState;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::{RingBuffer, Sample};
    pub use crate::controller::{RunState, SimulationController};
    pub use crate::period::{ExactPeriod, PeriodReport};
    pub use crate::settings::{IntegrationScheme, PhysicalParameters, SimulationConfig};
    pub use crate::state::PendulumState;
}
