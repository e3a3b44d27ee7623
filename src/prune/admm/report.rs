//! ADMM refresh outcomes and convergence diagnostics.

use serde::{Deserialize, Serialize};

/// Magnitude below which a weight counts as "small".
pub const SMALL_WEIGHT_EPS: f32 = 1e-3;

/// Whether the last `update` call refreshed Z and U.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RefreshState {
    /// Z and U unchanged by the last call.
    #[default]
    Stale,
    /// Z and U recomputed by the last call.
    Refreshed,
}

/// Per-tensor result of one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshRecord {
    /// Parameter identifier.
    pub name: String,
    /// Threshold applied to |W + U|.
    pub threshold: f32,
    /// Elements kept by the new mask.
    pub kept: usize,
    /// Residual mass outside the kept support: sum(|U - Z| * (1 - mask)).
    pub target_mask_sum: f64,
}

/// Result of [`AdmmOperator::update`](super::AdmmOperator::update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpdateOutcome {
    /// Epoch was not a multiple of the update period.
    Stale,
    /// Z and U were refreshed; one record per tracked tensor.
    Refreshed(Vec<RefreshRecord>),
}

impl UpdateOutcome {
    /// Whether this call refreshed Z and U.
    pub fn is_refreshed(&self) -> bool {
        matches!(self, UpdateOutcome::Refreshed(_))
    }

    /// Refresh records (empty when stale).
    pub fn records(&self) -> &[RefreshRecord] {
        match self {
            UpdateOutcome::Stale => &[],
            UpdateOutcome::Refreshed(records) => records,
        }
    }
}

/// Per-tensor convergence diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmmTensorReport {
    /// Parameter identifier.
    pub name: String,
    /// Tensor shape.
    pub shape: Vec<usize>,
    /// Element count.
    pub numel: usize,
    /// ‖W − Z‖² (sum of squared differences).
    pub w_z_error: f64,
    /// Elements of Z exactly equal to zero.
    pub zero_count: usize,
    /// Elements of W with |w| < [`SMALL_WEIGHT_EPS`].
    pub small_count: usize,
}

impl AdmmTensorReport {
    /// Fraction of Z equal to exactly zero.
    pub fn target_sparsity(&self) -> f64 {
        ratio(self.zero_count, self.numel)
    }

    /// Fraction of W with magnitude below [`SMALL_WEIGHT_EPS`].
    pub fn small_sparsity(&self) -> f64 {
        ratio(self.small_count, self.numel)
    }
}

/// Diagnostics across all tracked tensors.
///
/// Aggregate sparsities are weighted by element count (total zeros over total
/// elements), not means of the per-tensor fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmmReport {
    /// Penalty coefficient of the operator.
    pub rho: f32,
    /// Per-tensor diagnostics in tracking order.
    pub tensors: Vec<AdmmTensorReport>,
    /// Sum of the per-tensor ‖W − Z‖².
    pub total_w_z_error: f64,
    /// Zeros in Z across all tensors.
    pub total_pruned: usize,
    /// Small weights across all tensors.
    pub total_small: usize,
    /// Elements across all tensors.
    pub total_elements: usize,
}

impl AdmmReport {
    pub(crate) fn from_tensors(rho: f32, tensors: Vec<AdmmTensorReport>) -> Self {
        let total_w_z_error = tensors.iter().map(|t| t.w_z_error).sum();
        let total_pruned = tensors.iter().map(|t| t.zero_count).sum();
        let total_small = tensors.iter().map(|t| t.small_count).sum();
        let total_elements = tensors.iter().map(|t| t.numel).sum();
        Self {
            rho,
            tensors,
            total_w_z_error,
            total_pruned,
            total_small,
            total_elements,
        }
    }

    /// Element-weighted fraction of Z equal to zero.
    pub fn target_sparsity(&self) -> f64 {
        ratio(self.total_pruned, self.total_elements)
    }

    /// Element-weighted fraction of small weights.
    pub fn small_sparsity(&self) -> f64 {
        ratio(self.total_small, self.total_elements)
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
