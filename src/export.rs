//! CSV export of recorded traces
//!
//! # CSV Format
//!
//! Time series share one time column:
//!
//! ```csv
//! time [s],angle [rad],velocity [rad/s],acceleration [rad/s^2]
//! 0.01666,1.5686,-0.1634,-9.8099
//! ```
//!
//! The phase portrait is written on its own:
//!
//! ```csv
//! angle [rad],velocity [rad/s]
//! 1.5686,-0.1634
//! ```

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::buffer::{RingBuffer, Sample};
use crate::controller::Traces;

/// Trace export failure
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub const TIME_SERIES_HEADER: [&str; 4] = [
    "time [s]",
    "angle [rad]",
    "velocity [rad/s]",
    "acceleration [rad/s^2]",
];

pub const PHASE_HEADER: [&str; 2] = ["angle [rad]", "velocity [rad/s]"];

/// Write angle, velocity and acceleration in chronological order
pub fn write_time_series<W: Write>(writer: W, traces: &Traces) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TIME_SERIES_HEADER)?;

    let rows = traces
        .angle
        .iter()
        .zip(traces.velocity.iter())
        .zip(traces.acceleration.iter());

    for ((angle, velocity), acceleration) in rows {
        wtr.write_record([
            angle.x.to_string(),
            angle.y.to_string(),
            velocity.y.to_string(),
            acceleration.y.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the `(angle, velocity)` phase portrait in chronological order
pub fn write_phase_portrait<W: Write>(
    writer: W,
    phase: &RingBuffer<Sample>,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(PHASE_HEADER)?;

    for sample in phase.iter() {
        wtr.write_record([sample.x.to_string(), sample.y.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save the time series to `path`
pub fn save_time_series(path: impl AsRef<Path>, traces: &Traces) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_time_series(file, traces)
}
