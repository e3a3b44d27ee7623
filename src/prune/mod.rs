//! Two-stage ADMM pruning
//!
//! - **ADMM stage**: [`AdmmOperator`] keeps an auxiliary Z and dual U per
//!   tracked tensor, refreshes them once every `update_period` epochs and
//!   injects the penalty gradient ρ(W − Z + U) every step.
//! - **Retrain stage**: [`RetrainOperator`] freezes a binary mask from |W|
//!   and re-applies it after every optimizer step.
//!
//! Both stages select their tensors through a [`SparsitySpec`] and share the
//! order-statistic [`threshold`] selector.
//!
//! # Example
//!
//! ```
//! use podar::model::NamedParameters;
//! use podar::prune::{AdmmConfig, AdmmOperator, RetrainOperator, SparsitySpec};
//! use podar::Tensor;
//!
//! let mut params = NamedParameters::new();
//! params.insert("fc.weight", Tensor::from_vec(vec![0.3, -0.7, 0.01, 0.5], true));
//! let spec = SparsitySpec::from_pairs([("fc.weight", 0.5)]);
//!
//! let mut admm = AdmmOperator::new(&params, &spec, AdmmConfig::default())?;
//! for epoch in 0..3 {
//!     admm.update(&params, epoch)?;
//!     // ... backward pass, then:
//!     admm.loss_grad(&mut params)?;
//!     // ... optimizer step
//! }
//!
//! let retrain = RetrainOperator::new(&params, &spec)?;
//! retrain.apply_mask(&mut params)?;
//! assert_eq!(retrain.report(&params)?.total_pruned, 2);
//! # Ok::<(), podar::Error>(())
//! ```
//!
//! # References
//!
//! - Zhang, T., et al. (2018). A Systematic DNN Weight Pruning Framework
//!   using Alternating Direction Method of Multipliers. ECCV.
//! - Han, S., et al. (2015). Learning both weights and connections. NeurIPS.

pub mod admm;
pub mod config;
pub mod retrain;
mod spec;
pub mod threshold;
mod tracked;

pub use admm::{AdmmConfig, AdmmOperator, AdmmReport, RefreshState, UpdateOutcome};
pub use config::{load_config, PruneConfig};
pub use retrain::{RetrainOperator, RetrainReport};
pub use spec::SparsitySpec;
pub use threshold::{build_mask, keep_count, select_threshold, SparsityMask};
pub use tracked::TrackedTensor;
