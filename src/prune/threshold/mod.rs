//! Order-statistic threshold selection and mask construction
//!
//! Given non-negative importance scores and a target fraction `f`, the
//! selector computes `k = floor(f * n)` and returns the k-th smallest score
//! (1-indexed). Elements strictly greater than that value are kept:
//!
//! - distinct scores: exactly `k - 1` lie below the threshold and `n - k`
//!   above it;
//! - ties at the threshold value all fail the strict comparison, so the kept
//!   count can only shrink;
//! - `k == 0` (fraction 0, or a tensor too small for `f * n` to reach 1)
//!   yields a threshold of `+inf` and an all-zero mask. This is the defined
//!   fallback for degenerate tensors, not an error.
//!
//! Elements are visited in flat row-major order; the tensor's rank never
//! matters.

mod mask;

#[cfg(test)]
mod proptests;

pub use mask::{build_mask, SparsityMask};

use ndarray::Array1;

/// Threshold returned when no element may pass.
pub const REJECT_ALL: f32 = f32::INFINITY;

/// Rank of the threshold order statistic: `floor(fraction * n)`.
///
/// Fractions stay `f64` from config parse to this product, so `floor`
/// matches the double-precision value of decimals such as `0.95`.
pub fn keep_count(fraction: f64, n: usize) -> usize {
    let k = (fraction * n as f64).floor();
    if k <= 0.0 {
        0
    } else {
        (k as usize).min(n)
    }
}

/// Select the k-th smallest importance value, `k = floor(fraction * n)`.
///
/// Returns [`REJECT_ALL`] when `k == 0`.
pub fn select_threshold(importance: &Array1<f32>, fraction: f64) -> f32 {
    let k = keep_count(fraction, importance.len());
    if k == 0 {
        return REJECT_ALL;
    }

    let mut scratch: Vec<f32> = importance.iter().copied().collect();
    let (_, kth, _) = scratch.select_nth_unstable_by(k - 1, f32::total_cmp);
    *kth
}
