//! Podar: ADMM pruning for neural-network weight tensors
//!
//! Two-stage structured pruning that plugs into an external training loop:
//!
//! 1. **ADMM stage** ([`prune::AdmmOperator`]): drives each tracked tensor
//!    toward its target sparsity while training continues. Once per epoch
//!    `update` refreshes the auxiliary variable Z and the dual variable U;
//!    once per step `loss_grad` adds the augmented-Lagrangian penalty
//!    gradient ρ(W − Z + U) before the optimizer step.
//! 2. **Retrain stage** ([`prune::RetrainOperator`]): freezes a hard binary
//!    mask derived from |W| and re-zeroes the pruned elements after every
//!    optimizer step.
//!
//! # Example
//!
//! ```
//! use podar::model::NamedParameters;
//! use podar::prune::{AdmmConfig, AdmmOperator, SparsitySpec};
//! use podar::Tensor;
//!
//! let mut params = NamedParameters::new();
//! params.insert("fc.weight", Tensor::from_vec(vec![0.1, 0.9, -0.2, 0.05], true));
//!
//! let spec = SparsitySpec::from_pairs([("fc.weight", 0.5)]);
//! let config = AdmmConfig::default().with_rho(0.1).with_update_period(1);
//! let mut admm = AdmmOperator::new(&params, &spec, config)?;
//!
//! admm.update(&params, 0)?;
//! admm.loss_grad(&mut params)?;
//! # Ok::<(), podar::error::Error>(())
//! ```

pub mod autograd;
pub mod cli;
pub mod error;
pub mod model;
pub mod prune;

pub use autograd::Tensor;
pub use error::{Error, Result};
