//! Measured period from ascending zero crossings of the angle.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Running period measurement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodMeasurement {
    /// Ascending zero crossings seen so far, including the first
    pub crossing_count: u32,

    /// Interpolated time of the first crossing; the reference `t0`
    pub first_crossing_time: f64,

    /// Average period over all cycles since `t0`. Meaningful only once
    /// `crossing_count >= 2`
    pub last_measured_period: f64,
}

impl PeriodMeasurement {
    /// Measured period, once at least one full cycle has been observed
    pub fn period(&self) -> Option<f64> {
        (self.crossing_count >= 2).then_some(self.last_measured_period)
    }
}

/// Fraction of the step at which the angle crosses zero going upwards.
///
/// Returns `None` unless `before < 0` and `after >= 0`. The fraction assumes
/// the angle varies linearly across the step.
#[inline]
pub fn ascending_crossing_fraction(before: f64, after: f64) -> Option<f64> {
    if after >= 0.0 && before < 0.0 {
        Some(before / (before - after))
    } else {
        None
    }
}

/// Upward zero-crossing period estimator
///
/// Only ascending crossings are counted, so each one marks a full cycle.
/// The reported period is the cumulative average since the first crossing:
///
/// ```text
/// T = (t_n - t_0) / n
/// ```
///
/// which smooths interpolation noise but reacts slowly to parameter edits.
/// The duration of the latest single cycle is kept alongside it.
#[derive(Debug, Clone, Default)]
pub struct PeriodEstimator {
    measurement: PeriodMeasurement,
    previous_crossing: Option<f64>,
    last_cycle: Option<f64>,
}

impl PeriodEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measurement(&self) -> &PeriodMeasurement {
        &self.measurement
    }

    /// Cumulative average period, once defined
    pub fn period(&self) -> Option<f64> {
        self.measurement.period()
    }

    /// Duration between the two most recent crossings
    pub fn last_cycle_period(&self) -> Option<f64> {
        self.last_cycle
    }

    /// Feed one integration step.
    ///
    /// `step_start` is the simulated time at the beginning of the step.
    /// Returns the interpolated crossing time when the step contains an
    /// ascending zero crossing.
    pub fn observe(
        &mut self,
        angle_before: f64,
        angle_after: f64,
        step_start: f64,
        dt: f64,
    ) -> Option<f64> {
        let fraction = ascending_crossing_fraction(angle_before, angle_after)?;
        let crossing_time = step_start + dt * fraction;

        let m = &mut self.measurement;
        if m.crossing_count == 0 {
            m.first_crossing_time = crossing_time;
        } else {
            m.last_measured_period =
                (crossing_time - m.first_crossing_time) / f64::from(m.crossing_count);
        }
        m.crossing_count += 1;

        if let Some(previous) = self.previous_crossing {
            self.last_cycle = Some(crossing_time - previous);
        }
        self.previous_crossing = Some(crossing_time);

        trace!(
            time = crossing_time,
            count = m.crossing_count,
            period = m.last_measured_period,
            "ascending zero crossing"
        );

        Some(crossing_time)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
