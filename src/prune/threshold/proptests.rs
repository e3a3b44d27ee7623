//! Property-based tests for threshold selection.

use super::{build_mask, keep_count, select_threshold};
use ndarray::Array1;
use proptest::prelude::*;

/// Distinct non-negative scores: a shuffled arithmetic progression.
fn distinct_scores() -> impl Strategy<Value = Vec<f32>> {
    (1usize..200).prop_flat_map(|n| {
        Just((0..n).map(|i| i as f32 * 0.25).collect::<Vec<_>>()).prop_shuffle()
    })
}

proptest! {
    /// With distinct scores, exactly k-1 fall below and n-k rise above.
    #[test]
    fn threshold_order_statistic_distinct(
        scores in distinct_scores(),
        fraction in 0.0f64..=1.0,
    ) {
        let n = scores.len();
        let importance = Array1::from(scores);
        let k = keep_count(fraction, n);
        let threshold = select_threshold(&importance, fraction);
        let above = importance.iter().filter(|&&v| v > threshold).count();

        if k == 0 {
            prop_assert_eq!(above, 0);
        } else {
            let below = importance.iter().filter(|&&v| v < threshold).count();
            prop_assert_eq!(below, k - 1);
            prop_assert_eq!(above, n - k);
        }
    }

    /// Ties can only shrink the kept set.
    #[test]
    fn threshold_ties_never_exceed(
        scores in prop::collection::vec(0u8..8, 1..100),
        fraction in 0.0f64..=1.0,
    ) {
        let n = scores.len();
        let importance = Array1::from(scores.iter().map(|&v| f32::from(v)).collect::<Vec<_>>());
        let k = keep_count(fraction, n);
        let threshold = select_threshold(&importance, fraction);
        let mask = build_mask(&importance, &[n], threshold).expect("shape matches");

        prop_assert!(mask.nnz() <= n - k);
        prop_assert!(mask.values().iter().all(|&v| v == 0.0 || v == 1.0));
    }
}
