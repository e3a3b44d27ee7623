//! ADMM pruning stage
//!
//! Splits "minimize loss subject to per-tensor sparsity" into a primal
//! variable W (the live weights), an auxiliary variable Z (W + U projected
//! onto the sparsity constraint) and a dual variable U (accumulated W − Z
//! residual). The penalty term (ρ/2)‖W − Z + U‖² pulls W toward Z during
//! ordinary training.
//!
//! # References
//!
//! - Zhang, T., et al. (2018). A Systematic DNN Weight Pruning Framework
//!   using Alternating Direction Method of Multipliers. ECCV.
//! - Boyd, S., et al. (2011). Distributed Optimization and Statistical
//!   Learning via the Alternating Direction Method of Multipliers.

mod config;
mod operator;
mod report;

#[cfg(test)]
mod proptests;

pub use config::AdmmConfig;
pub use operator::AdmmOperator;
pub use report::{
    AdmmReport, AdmmTensorReport, RefreshRecord, RefreshState, UpdateOutcome, SMALL_WEIGHT_EPS,
};
