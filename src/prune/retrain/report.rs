//! Retrain-stage sparsity counts.

use serde::{Deserialize, Serialize};

/// Exact-zero count for one tensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrainTensorReport {
    /// Parameter identifier.
    pub name: String,
    /// Elements equal to exactly zero.
    pub pruned: usize,
    /// Element count.
    pub numel: usize,
}

impl RetrainTensorReport {
    /// Pruned elements as a percentage of the tensor.
    pub fn pruned_percent(&self) -> f64 {
        percent(self.pruned, self.numel)
    }
}

/// Exact-zero counts across all tracked tensors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrainReport {
    /// Per-tensor counts in tracking order.
    pub tensors: Vec<RetrainTensorReport>,
    /// Zeros across all tensors.
    pub total_pruned: usize,
    /// Elements across all tensors.
    pub total_elements: usize,
}

impl RetrainReport {
    pub(crate) fn from_tensors(tensors: Vec<RetrainTensorReport>) -> Self {
        let total_pruned = tensors.iter().map(|t| t.pruned).sum();
        let total_elements = tensors.iter().map(|t| t.numel).sum();
        Self {
            tensors,
            total_pruned,
            total_elements,
        }
    }

    /// Pruned elements as a percentage of all tracked elements.
    pub fn pruned_percent(&self) -> f64 {
        percent(self.total_pruned, self.total_elements)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
