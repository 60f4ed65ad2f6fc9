//! Physical parameters and run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::constants::{
    DEFAULT_DAMPING, DEFAULT_GRAVITY, DEFAULT_HISTORY_CAPACITY, DEFAULT_INITIAL_ANGLE,
    DEFAULT_LENGTH, DEFAULT_TIMESTEP,
};

/// Rejected parameter set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Gravity must be positive and finite, got {0}")]
    Gravity(f64),

    #[error("Length must be positive and finite, got {0}")]
    Length(f64),

    #[error("Damping must be non-negative and finite, got {0}")]
    Damping(f64),

    #[error("Timestep must be positive and finite, got {0}")]
    Timestep(f64),

    #[error("Initial angle must be finite, got {0}")]
    InitialAngle(f64),
}

/// Failure while loading a [`SimulationConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    Invalid(#[from] ParameterError),

    #[error("History capacity must be positive")]
    ZeroCapacity,
}

/// Available stepping schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationScheme {
    /// Explicit Euler (1st order)
    Euler,
    /// Velocity Verlet (2nd order)
    VelocityVerlet,
}

impl Default for IntegrationScheme {
    fn default() -> Self {
        IntegrationScheme::VelocityVerlet
    }
}

impl IntegrationScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationScheme::Euler => "Euler",
            IntegrationScheme::VelocityVerlet => "Velocity Verlet",
        }
    }

    /// The other scheme, for a front-end toggle
    pub fn toggled(self) -> Self {
        match self {
            IntegrationScheme::Euler => IntegrationScheme::VelocityVerlet,
            IntegrationScheme::VelocityVerlet => IntegrationScheme::Euler,
        }
    }
}

/// Physical parameters of the pendulum
///
/// Front ends are expected to keep values in their slider ranges
/// (`initial_angle` in `[0, 2π]`, `dt` in `[0.001, 0.5]`, `gravity` in `[0, 30]`,
/// `damping` in `[0, 3]`, `length` in `[0.1, 5]`). Nothing here re-checks them
/// unless [`PhysicalParameters::validate`] is called explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParameters {
    /// Gravitational acceleration g [m/s^2]
    pub gravity: f64,

    /// Pendulum length l [m]
    pub length: f64,

    /// Linear damping coefficient λ [1/s]
    pub damping: f64,

    /// Fixed timestep [s]
    pub dt: f64,

    /// Release angle θ₀ [rad]
    pub initial_angle: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            length: DEFAULT_LENGTH,
            damping: DEFAULT_DAMPING,
            dt: DEFAULT_TIMESTEP,
            initial_angle: DEFAULT_INITIAL_ANGLE,
        }
    }
}

impl PhysicalParameters {
    /// Natural frequency squared, g/l
    #[inline]
    pub fn omega_squared(&self) -> f64 {
        self.gravity / self.length
    }

    /// Check the parameters against the physical domain.
    ///
    /// Only called by hardened entry points such as
    /// [`SimulationController::try_set_parameters`](crate::SimulationController::try_set_parameters).
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ParameterError::Gravity(self.gravity));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(ParameterError::Length(self.length));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ParameterError::Damping(self.damping));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ParameterError::Timestep(self.dt));
        }
        if !self.initial_angle.is_finite() {
            return Err(ParameterError::InitialAngle(self.initial_angle));
        }
        Ok(())
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub parameters: PhysicalParameters,

    pub scheme: IntegrationScheme,

    /// Samples retained per trace buffer
    pub history_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            parameters: PhysicalParameters::default(),
            scheme: IntegrationScheme::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.parameters.validate()?;
        if config.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(config)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_setup() {
        let params = PhysicalParameters::default();
        assert_eq!(params.gravity, 9.81);
        assert_eq!(params.length, 1.0);
        assert_eq!(params.damping, 0.0);
        assert_eq!(params.dt, 0.01666);
        assert_eq!(params.initial_angle, 1.57);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let zero_length = PhysicalParameters {
            length: 0.0,
            ..Default::default()
        };
        assert_eq!(zero_length.validate(), Err(ParameterError::Length(0.0)));

        let negative_gravity = PhysicalParameters {
            gravity: -1.0,
            ..Default::default()
        };
        assert_eq!(
            negative_gravity.validate(),
            Err(ParameterError::Gravity(-1.0))
        );

        let zero_dt = PhysicalParameters {
            dt: 0.0,
            ..Default::default()
        };
        assert_eq!(zero_dt.validate(), Err(ParameterError::Timestep(0.0)));

        let nan_angle = PhysicalParameters {
            initial_angle: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_angle.validate(),
            Err(ParameterError::InitialAngle(_))
        ));
    }

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(IntegrationScheme::default(), IntegrationScheme::VelocityVerlet);
        assert_eq!(
            IntegrationScheme::Euler.toggled(),
            IntegrationScheme::VelocityVerlet
        );
        assert_eq!(
            IntegrationScheme::VelocityVerlet.toggled(),
            IntegrationScheme::Euler
        );
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = SimulationConfig::from_json_str(
            r#"{ "parameters": { "damping": 0.5 }, "scheme": "euler" }"#,
        )
        .unwrap();

        assert_eq!(config.parameters.damping, 0.5);
        assert_eq!(config.parameters.gravity, 9.81);
        assert_eq!(config.scheme, IntegrationScheme::Euler);
        assert_eq!(config.history_capacity, 2000);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let err = SimulationConfig::from_json_str(r#"{ "parameters": { "length": -2.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ParameterError::Length(_))));

        let err = SimulationConfig::from_json_str(r#"{ "history_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));

        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
