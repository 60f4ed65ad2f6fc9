//! Simulation controller: run state, per-tick orchestration and recorded traces.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::buffer::{RingBuffer, Sample};
use crate::export::{self, ExportError};
use crate::integrator::PendulumIntegrator;
use crate::period::{PeriodEstimator, PeriodMeasurement, PeriodReport};
use crate::settings::{IntegrationScheme, ParameterError, PhysicalParameters, SimulationConfig};
use crate::state::PendulumState;

/// Run state of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Stopped,
    Running,
    Paused,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

/// The four recorded traces
#[derive(Debug, Clone)]
pub struct Traces {
    /// (time, angle)
    pub angle: RingBuffer<Sample>,
    /// (time, angular velocity)
    pub velocity: RingBuffer<Sample>,
    /// (time, angular acceleration)
    pub acceleration: RingBuffer<Sample>,
    /// (angle, angular velocity)
    pub phase: RingBuffer<Sample>,
}

impl Traces {
    pub fn new(capacity: usize) -> Self {
        Self {
            angle: RingBuffer::new(capacity),
            velocity: RingBuffer::new(capacity),
            acceleration: RingBuffer::new(capacity),
            phase: RingBuffer::new(capacity),
        }
    }

    fn record(&mut self, state: &PendulumState) {
        let t = state.elapsed_time;
        self.angle.append(t, state.angle);
        self.velocity.append(t, state.angular_velocity);
        self.acceleration.append(t, state.angular_acceleration);
        self.phase.append(state.angle, state.angular_velocity);
    }

    pub fn clear(&mut self) {
        self.angle.clear();
        self.velocity.clear();
        self.acceleration.clear();
        self.phase.clear();
    }

    /// Samples per trace; all four are appended together
    pub fn len(&self) -> usize {
        self.angle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angle.is_empty()
    }
}

/// Largest and smallest angle reached since the last reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleExtremes {
    pub max: f64,
    pub min: f64,
}

impl AngleExtremes {
    fn at(angle: f64) -> Self {
        Self {
            max: angle,
            min: angle,
        }
    }

    fn include(&mut self, angle: f64) {
        self.max = self.max.max(angle);
        self.min = self.min.min(angle);
    }
}

/// Serializable view of the controller for front ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub run_state: RunState,
    pub scheme: IntegrationScheme,
    pub parameters: PhysicalParameters,
    pub state: PendulumState,
    pub measurement: PeriodMeasurement,
    pub periods: PeriodReport,
    pub extremes: AngleExtremes,
    pub energy: f64,
}

/// Drives the pendulum simulation for a front end
///
/// The front end calls [`tick`](Self::tick) once per frame and reads the
/// published state, traces and periods afterwards. Control happens through
/// [`play`](Self::play), [`pause`](Self::pause), [`reset`](Self::reset),
/// parameter edits and the scheme toggle.
///
/// # Example
///
/// ```
/// use pendulum_sim::{PhysicalParameters, SimulationController};
///
/// let mut sim = SimulationController::new(PhysicalParameters::default());
/// sim.play();
/// for _ in 0..120 {
///     sim.tick(sim.parameters().dt);
/// }
///
/// assert_eq!(sim.traces().len(), 120);
/// println!("{}", sim.periods());
/// ```
#[derive(Debug, Clone)]
pub struct SimulationController {
    integrator: PendulumIntegrator,
    estimator: PeriodEstimator,
    traces: Traces,
    run_state: RunState,
    /// Set by `play`, cleared by `reset`. While unset the angle follows
    /// `initial_angle`.
    started: bool,
    extremes: AngleExtremes,
}

impl SimulationController {
    /// Controller with the default scheme and history capacity
    pub fn new(params: PhysicalParameters) -> Self {
        Self::from_config(SimulationConfig {
            parameters: params,
            ..Default::default()
        })
    }

    /// # Panics
    ///
    /// Panics if `config.history_capacity` is zero.
    pub fn from_config(config: SimulationConfig) -> Self {
        let params = config.parameters;
        Self {
            integrator: PendulumIntegrator::new(params, config.scheme),
            estimator: PeriodEstimator::new(),
            traces: Traces::new(config.history_capacity),
            run_state: RunState::Stopped,
            started: false,
            extremes: AngleExtremes::at(params.initial_angle),
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Whether `play` has been called since the last reset
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn play(&mut self) {
        if self.run_state != RunState::Running {
            debug!(from = self.run_state.as_str(), "play");
        }
        self.run_state = RunState::Running;
        self.started = true;
    }

    /// Stop advancing; the state is left untouched
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            debug!(time = self.state().elapsed_time, "pause");
            self.run_state = RunState::Paused;
        }
    }

    /// Back to the initial state with all measurements and traces cleared
    pub fn reset(&mut self) {
        info!(time = self.state().elapsed_time, "reset");
        self.run_state = RunState::Stopped;
        self.started = false;
        self.integrator.reset();
        self.estimator.reset();
        self.traces.clear();
        self.extremes = AngleExtremes::at(self.integrator.parameters().initial_angle);
    }

    /// Advance the simulation by one step of `dt`.
    ///
    /// Does nothing unless running, other than keeping an unstarted pendulum
    /// at the initial angle. Returns the new state when a step was taken.
    pub fn tick(&mut self, dt: f64) -> Option<PendulumState> {
        if !self.is_running() {
            self.hold_initial_angle();
            return None;
        }

        let before = *self.integrator.state();
        let after = self.integrator.step(dt);

        self.estimator
            .observe(before.angle, after.angle, before.elapsed_time, dt);
        self.traces.record(&after);
        self.extremes.include(after.angle);

        Some(after)
    }

    fn hold_initial_angle(&mut self) {
        if !self.started {
            let angle = self.integrator.parameters().initial_angle;
            self.integrator.hold_angle(angle);
            self.extremes = AngleExtremes::at(angle);
        }
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        self.integrator.parameters()
    }

    /// Replace the parameters without validation; takes effect on the next tick
    pub fn set_parameters(&mut self, params: PhysicalParameters) {
        self.integrator.set_parameters(params);
        self.hold_initial_angle();
    }

    /// Edit the parameters in place
    pub fn update_parameters<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut PhysicalParameters),
    {
        let mut params = *self.integrator.parameters();
        edit(&mut params);
        self.set_parameters(params);
    }

    /// Validate, then replace the parameters
    pub fn try_set_parameters(&mut self, params: PhysicalParameters) -> Result<(), ParameterError> {
        if let Err(err) = params.validate() {
            warn!(%err, "rejected parameters");
            return Err(err);
        }
        self.set_parameters(params);
        Ok(())
    }

    pub fn scheme(&self) -> IntegrationScheme {
        self.integrator.scheme()
    }

    pub fn set_scheme(&mut self, scheme: IntegrationScheme) {
        self.integrator.set_scheme(scheme);
    }

    pub fn toggle_scheme(&mut self) {
        self.set_scheme(self.scheme().toggled());
    }

    pub fn state(&self) -> &PendulumState {
        self.integrator.state()
    }

    pub fn measurement(&self) -> &PeriodMeasurement {
        self.estimator.measurement()
    }

    /// Duration of the most recent full cycle
    pub fn last_cycle_period(&self) -> Option<f64> {
        self.estimator.last_cycle_period()
    }

    /// Theoretical periods from the current parameters plus the measured one
    pub fn periods(&self) -> PeriodReport {
        PeriodReport::new(self.parameters(), self.estimator.period())
    }

    pub fn traces(&self) -> &Traces {
        &self.traces
    }

    pub fn extremes(&self) -> AngleExtremes {
        self.extremes
    }

    /// Mechanical energy per unit mass of the current state
    pub fn energy(&self) -> f64 {
        self.state().energy(self.parameters())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            run_state: self.run_state,
            scheme: self.scheme(),
            parameters: *self.parameters(),
            state: *self.state(),
            measurement: *self.measurement(),
            periods: self.periods(),
            extremes: self.extremes,
            energy: self.energy(),
        }
    }

    /// Write the angle, velocity and acceleration traces as CSV
    pub fn export_traces_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        export::write_time_series(writer, &self.traces)
    }

    /// Write the phase portrait as CSV
    pub fn export_phase_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        export::write_phase_portrait(writer, &self.traces.phase)
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::from_config(SimulationConfig::default())
    }
}
