//! Headless pendulum runner.
//!
//! ```bash
//! # Default setup: θ₀ = 1.57 rad, Verlet, 1000 steps
//! pendulum-sim
//!
//! # Compare against the Euler baseline with damping on
//! pendulum-sim --scheme euler --damping 0.2 --steps 5000
//!
//! # Load parameters from JSON and dump the traces
//! pendulum-sim --config run.json --csv traces.csv
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pendulum_sim::export::save_time_series;
use pendulum_sim::{IntegrationScheme, SimulationConfig, SimulationController};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Euler,
    Verlet,
}

impl From<SchemeArg> for IntegrationScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Euler => IntegrationScheme::Euler,
            SchemeArg::Verlet => IntegrationScheme::VelocityVerlet,
        }
    }
}

/// Simulate a damped pendulum and report its periods.
#[derive(Parser, Debug)]
#[command(name = "pendulum-sim", version, about)]
struct Cli {
    /// JSON run configuration; flags below override it
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Number of fixed steps to run
    #[arg(long, short = 'n', default_value_t = 1000)]
    steps: usize,

    /// Integration scheme
    #[arg(long, value_enum)]
    scheme: Option<SchemeArg>,

    /// Damping coefficient λ [1/s]
    #[arg(long)]
    damping: Option<f64>,

    /// Release angle θ₀ [rad]
    #[arg(long)]
    angle: Option<f64>,

    /// Fixed timestep [s]
    #[arg(long)]
    dt: Option<f64>,

    /// Write angle/velocity/acceleration traces to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<(SimulationConfig, usize, Option<PathBuf>), Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(scheme) = self.scheme {
            config.scheme = scheme.into();
        }
        if let Some(damping) = self.damping {
            config.parameters.damping = damping;
        }
        if let Some(angle) = self.angle {
            config.parameters.initial_angle = angle;
        }
        if let Some(dt) = self.dt {
            config.parameters.dt = dt;
        }
        config.parameters.validate()?;

        Ok((config, self.steps, self.csv))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (config, steps, csv) = Cli::parse().into_config()?;

    info!(
        scheme = config.scheme.as_str(),
        steps,
        dt = config.parameters.dt,
        "starting simulation"
    );

    let mut sim = SimulationController::from_config(config);
    let initial_energy = sim.energy();

    sim.play();
    for _ in 0..steps {
        sim.tick(sim.parameters().dt);
    }
    sim.pause();

    let state = sim.state();
    let extremes = sim.extremes();

    println!("Scheme:       {}", sim.scheme().as_str());
    println!("Time:         {:.4} s", state.elapsed_time);
    println!("Angle:        {:.6} rad", state.angle);
    println!("Velocity:     {:.6} rad/s", state.angular_velocity);
    println!("Acceleration: {:.6} rad/s^2", state.angular_acceleration);
    println!("Swing:        [{:.6}, {:.6}] rad", extremes.min, extremes.max);
    println!(
        "Energy:       {:.6} J/kg (initial {:.6})",
        sim.energy(),
        initial_energy
    );
    println!();
    println!("{}", sim.periods());
    if let Some(cycle) = sim.last_cycle_period() {
        println!("Last cycle: {cycle:.6} s");
    }

    if let Some(path) = csv {
        save_time_series(&path, sim.traces())?;
        info!(path = %path.display(), samples = sim.traces().len(), "wrote traces");
    }

    Ok(())
}
