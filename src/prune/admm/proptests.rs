//! Property-based tests for the ADMM recurrence.

use super::{AdmmConfig, AdmmOperator};
use crate::model::NamedParameters;
use crate::prune::threshold::keep_count;
use crate::prune::SparsitySpec;
use crate::Tensor;
use proptest::prelude::*;

fn operator(values: Vec<f32>, fraction: f64) -> (NamedParameters, AdmmOperator) {
    let mut params = NamedParameters::new();
    params.insert("w", Tensor::from_vec(values, true));
    let spec = SparsitySpec::from_pairs([("w", fraction)]);
    let admm = AdmmOperator::new(&params, &spec, AdmmConfig::default()).expect("valid spec");
    (params, admm)
}

proptest! {
    /// The first refresh never accumulates residual.
    #[test]
    fn epoch_zero_keeps_u_zero(
        values in prop::collection::vec(-10.0f32..10.0, 1..64),
        fraction in 0.0f64..=1.0,
    ) {
        let (params, mut admm) = operator(values, fraction);
        admm.update(&params, 0).expect("shapes match");
        let u = admm.u("w").expect("tracked");
        prop_assert!(u.iter().all(|&v| v == 0.0));
    }

    /// Z keeps at most n - k non-zeros and each is drawn from W + U.
    #[test]
    fn z_is_projection_of_w_plus_u(
        values in prop::collection::vec(-10.0f32..10.0, 1..64),
        fraction in 0.0f64..=1.0,
    ) {
        let n = values.len();
        let (params, mut admm) = operator(values.clone(), fraction);
        admm.update(&params, 0).expect("shapes match");
        let z = admm.z("w").expect("tracked");

        let nonzero = z.iter().filter(|&&v| v != 0.0).count();
        prop_assert!(nonzero <= n - keep_count(fraction, n));
        for (&zv, &wv) in z.iter().zip(values.iter()) {
            prop_assert!(zv == 0.0 || zv == wv);
        }
    }

    /// After a later refresh, U_new - U_prev == W - Z_new.
    #[test]
    fn residual_accumulates(
        first in prop::collection::vec(-4.0f32..4.0, 8),
        second in prop::collection::vec(-4.0f32..4.0, 8),
        fraction in 0.0f64..=1.0,
    ) {
        let (mut params, mut admm) = operator(first, fraction);
        admm.update(&params, 0).expect("shapes match");
        let u_prev = admm.u("w").expect("tracked").clone();

        params.insert("w", Tensor::from_vec(second.clone(), true));
        admm.update(&params, 1).expect("shapes match");
        let u_new = admm.u("w").expect("tracked");
        let z_new = admm.z("w").expect("tracked");

        for i in 0..8 {
            let lhs = u_new[i] - u_prev[i];
            let rhs = second[i] - z_new[i];
            prop_assert!((lhs - rhs).abs() <= 1e-5);
        }
    }
}
