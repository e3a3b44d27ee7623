//! Masked retraining stage
//!
//! After the ADMM stage, a hard mask is frozen from the current weight
//! magnitudes and re-applied after every optimizer step so pruned elements
//! stay at exactly zero.

mod operator;
mod report;


pub use operator::RetrainOperator;
pub use report::{RetrainReport, RetrainTensorReport};
