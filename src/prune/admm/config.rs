//! ADMM stage settings.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by every tensor of one ADMM run.
///
/// # Example
///
/// ```
/// use podar::prune::AdmmConfig;
///
/// let config = AdmmConfig::default().with_update_period(5).with_rho(1.5e-3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmmConfig {
    /// Epochs between Z/U refreshes (> 0).
    pub update_period: usize,
    /// Penalty coefficient ρ (finite, > 0).
    pub rho: f32,
}

impl Default for AdmmConfig {
    fn default() -> Self {
        Self {
            update_period: 1,
            rho: 1e-3,
        }
    }
}

impl AdmmConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the refresh period in epochs.
    pub fn with_update_period(mut self, period: usize) -> Self {
        self.update_period = period;
        self
    }

    /// Set the penalty coefficient.
    pub fn with_rho(mut self, rho: f32) -> Self {
        self.rho = rho;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.update_period == 0 {
            return Err(Error::UnsupportedConfiguration(
                "update_period must be > 0".to_string(),
            ));
        }
        if !self.rho.is_finite() || self.rho <= 0.0 {
            return Err(Error::UnsupportedConfiguration(format!(
                "rho must be finite and > 0, got {}",
                self.rho
            )));
        }
        Ok(())
    }
}
