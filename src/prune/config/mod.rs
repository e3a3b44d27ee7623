//! Pruning run configuration
//!
//! A run is described by the ADMM settings and the per-parameter fraction
//! table, loaded from YAML:
//!
//! ```yaml
//! admm:
//!   update_period: 5
//!   rho: 0.0015
//! sparsity:
//!   features.3.weight: 0.8
//!   classifier.1.weight: 0.95
//! ```

mod prune_config;


pub use prune_config::{load_config, PruneConfig};
