//! Engine configuration.
//!
//! Tunables for the capacity cursor. Loadable from TOML:
//!
//! ```toml
//! max_months = 120
//! epsilon = 1e-9
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ForecastError, Result};

/// Default simulation horizon: 20 years.
pub const DEFAULT_MAX_MONTHS: u32 = 240;

/// Default tolerance for "month fully consumed" comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Forecasting engine settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastConfig {
    /// Maximum number of month advances before a cursor gives up.
    #[serde(default = "default_max_months")]
    pub max_months: u32,
    /// Floating tolerance when checking whether a month is used up.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ForecastConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the month cap.
    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months;
        self
    }

    /// Sets the month-consumed tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_months == 0 {
            return Err(ForecastError::InvalidConfig(
                "max_months must be at least 1".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || !(0.0..0.5).contains(&self.epsilon) {
            return Err(ForecastError::InvalidConfig(format!(
                "epsilon must be in [0, 0.5), got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ForecastConfig = toml::from_str(content).map_err(|e| {
            ForecastError::InvalidConfig(format!("failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ForecastError::InvalidConfig(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }
}
