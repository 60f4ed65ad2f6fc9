//! Fixed-step integration schemes for the pendulum
//!
//! Provides:
//! - Explicit Euler (1st order), kept as the baseline
//! - Velocity Verlet (2nd order)

mod base;
mod euler;
mod verlet;

pub use base::*;
pub use euler::Euler;
pub use verlet::VelocityVerlet;

use crate::settings::IntegrationScheme;

/// Stepping scheme for a given [`IntegrationScheme`]
pub fn scheme_for(scheme: IntegrationScheme) -> &'static dyn StepScheme {
    match scheme {
        IntegrationScheme::Euler => &Euler,
        IntegrationScheme::VelocityVerlet => &VelocityVerlet,
    }
}
