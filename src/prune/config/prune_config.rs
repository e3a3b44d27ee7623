//! Main pruning configuration struct.

use crate::error::{Error, Result};
use crate::prune::admm::AdmmConfig;
use crate::prune::spec::SparsitySpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one two-stage pruning run.
///
/// # Example
///
/// ```
/// use podar::prune::{AdmmConfig, PruneConfig, SparsitySpec};
///
/// let config = PruneConfig::new()
///     .with_admm(AdmmConfig::default().with_update_period(3))
///     .with_sparsity(SparsitySpec::from_pairs([("fc.weight", 0.9)]));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PruneConfig {
    /// ADMM stage settings.
    #[serde(default)]
    pub admm: AdmmConfig,

    /// Per-parameter target fractions.
    pub sparsity: SparsitySpec,
}

impl PruneConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ADMM settings.
    pub fn with_admm(mut self, admm: AdmmConfig) -> Self {
        self.admm = admm;
        self
    }

    /// Set the sparsity table.
    pub fn with_sparsity(mut self, sparsity: SparsitySpec) -> Self {
        self.sparsity = sparsity;
        self
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))
    }

    /// Serialize the configuration to YAML text.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.admm.validate()?;
        self.sparsity.validate()?;
        if self.sparsity.is_empty() {
            return Err(Error::UnsupportedConfiguration(
                "sparsity table names no parameters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PruneConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    let config = PruneConfig::from_yaml_str(&yaml)?;
    config.validate()?;
    Ok(config)
}
