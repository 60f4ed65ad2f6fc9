//! Theoretical pendulum periods.
//!
//! The small-angle (Huygens) period is always available. The exact undamped
//! period uses the complete elliptic integral of the first kind, approximated
//! with the Abramowitz & Stegun polynomial fit (Handbook of Mathematical
//! Functions, 17.3.34), |error| < 2e-8.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::settings::PhysicalParameters;
use crate::utils::constants::DAMPING_TOLERANCE;

const A: [f64; 5] = [
    1.386_294_361_12,
    0.096_663_442_59,
    0.035_900_923_83,
    0.037_425_637_13,
    0.014_511_962_12,
];

const B: [f64; 5] = [
    0.5,
    0.124_985_935_97,
    0.068_802_485_76,
    0.033_283_553_46,
    0.004_417_870_12,
];

/// Horner evaluation, coefficients lowest order first
#[inline]
fn poly(coeffs: &[f64; 5], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Complete elliptic integral of the first kind K(k), modulus `k`.
///
/// Returns `None` at the logarithmic singularity `|k| >= 1`.
pub fn complete_elliptic_k(k: f64) -> Option<f64> {
    let t = 1.0 - k * k;
    if t <= 0.0 {
        return None;
    }
    Some(poly(&A, t) - poly(&B, t) * t.ln())
}

/// Small-angle period `2π·sqrt(l/g)`.
///
/// Computed regardless of amplitude; it is only accurate for small swings.
pub fn huygens_period(length: f64, gravity: f64) -> f64 {
    2.0 * PI * (length / gravity).sqrt()
}

/// Exact period of the undamped pendulum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExactPeriod {
    /// `4·sqrt(l/g)·K(sin(θ₀/2))`
    Finite(f64),
    /// Damping is on; the undamped formula does not apply
    Damped,
    /// Released exactly inverted; the period is unbounded
    Divergent,
}

impl ExactPeriod {
    pub fn value(&self) -> Option<f64> {
        match self {
            ExactPeriod::Finite(t) => Some(*t),
            ExactPeriod::Damped | ExactPeriod::Divergent => None,
        }
    }
}

impl fmt::Display for ExactPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExactPeriod::Finite(t) => write!(f, "{t:.6} s"),
            ExactPeriod::Damped => f.write_str("damped oscillation"),
            ExactPeriod::Divergent => f.write_str("divergent"),
        }
    }
}

/// Exact undamped period for the release angle in `params`
pub fn exact_period(params: &PhysicalParameters) -> ExactPeriod {
    if params.damping >= DAMPING_TOLERANCE {
        return ExactPeriod::Damped;
    }

    let k = (params.initial_angle / 2.0).sin();
    match complete_elliptic_k(k) {
        Some(kk) => ExactPeriod::Finite(4.0 * (params.length / params.gravity).sqrt() * kk),
        None => ExactPeriod::Divergent,
    }
}

/// Theoretical and measured periods, for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub huygens: f64,
    pub exact: ExactPeriod,
    pub measured: Option<f64>,
}

impl PeriodReport {
    pub fn new(params: &PhysicalParameters, measured: Option<f64>) -> Self {
        Self {
            huygens: huygens_period(params.length, params.gravity),
            exact: exact_period(params),
            measured,
        }
    }
}

impl fmt::Display for PeriodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huygens:  {:.6} s", self.huygens)?;
        writeln!(f, "Exact:    {}", self.exact)?;
        match self.measured {
            Some(t) => write!(f, "Measured: {t:.6} s"),
            None => write!(f, "Measured: n/a"),
        }
    }
}
