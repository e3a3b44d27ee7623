//! Integration tests for the two-stage ADMM → retrain pipeline

use approx::assert_abs_diff_eq;
use ndarray::{arr1, Array1};
use podar::model::{NamedParameters, ParameterSet};
use podar::prune::{AdmmConfig, AdmmOperator, RetrainOperator, SparsitySpec};
use podar::Tensor;

const TARGET: [f32; 8] = [1.0, -0.05, 0.8, 0.02, -0.9, 0.03, 0.7, -0.01];

/// Primary-loss gradient of 0.5‖W − T‖², written the way a backward pass
/// would: into a freshly zeroed buffer.
fn backward(params: &mut NamedParameters, target: &Array1<f32>) {
    let w = params.get_mut("fc.weight").expect("parameter exists");
    w.zero_grad();
    let grad = w.data() - target;
    w.set_grad(grad);
}

fn sgd_step(params: &mut NamedParameters, lr: f32) {
    for (_, w) in params.iter_mut() {
        if let Some(grad) = w.grad().cloned() {
            w.data_mut().scaled_add(-lr, &grad);
        }
    }
}

#[test]
fn test_end_to_end_scenario() {
    let mut params = NamedParameters::new();
    params.insert("fc.weight", Tensor::from_vec(vec![0.1, 0.9, -0.2, 0.05], true));
    params
        .get_mut("fc.weight")
        .expect("exists")
        .set_grad(Array1::zeros(4));
    let spec = SparsitySpec::from_pairs([("fc.weight", 0.5)]);
    let config = AdmmConfig::default().with_rho(0.1).with_update_period(1);

    let mut admm = AdmmOperator::new(&params, &spec, config).expect("valid spec");
    let outcome = admm.update(&params, 0).expect("shapes match");
    assert_eq!(outcome.records()[0].threshold, 0.1);
    assert_eq!(admm.z("fc.weight"), Some(&arr1(&[0.0, 0.9, -0.2, 0.0])));
    assert_eq!(admm.u("fc.weight"), Some(&arr1(&[0.0, 0.0, 0.0, 0.0])));

    admm.loss_grad(&mut params).expect("shapes match");
    let grad = params
        .get("fc.weight")
        .and_then(|t| t.grad())
        .expect("gradient");
    for (g, e) in grad.iter().zip([0.01, 0.0, 0.0, 0.005]) {
        assert_abs_diff_eq!(*g, e, epsilon = 1e-7);
    }
}

#[test]
fn test_two_stage_training_reaches_exact_sparsity() {
    let target = arr1(&TARGET);
    let mut params = NamedParameters::new();
    params.insert("fc.weight", Tensor::from_vec(TARGET.to_vec(), true));
    params.insert("fc.bias", Tensor::from_vec(vec![0.0], true));
    let spec = SparsitySpec::from_pairs([("fc.weight", 0.5)]);
    let config = AdmmConfig::default().with_rho(0.5).with_update_period(1);
    let lr = 0.1;

    // ADMM stage
    let mut admm = AdmmOperator::new(&params, &spec, config).expect("valid spec");
    let mut errors = Vec::new();
    for epoch in 0..10 {
        admm.update(&params, epoch).expect("shapes match");
        errors.push(admm.report(&params).expect("ok").total_w_z_error);
        for _ in 0..20 {
            backward(&mut params, &target);
            admm.loss_grad(&mut params).expect("shapes match");
            sgd_step(&mut params, lr);
        }
    }

    assert_abs_diff_eq!(errors[0], 0.0039, epsilon = 1e-6);
    assert!(
        errors.windows(2).all(|w| w[1] < w[0]),
        "W-Z error must shrink every refresh: {errors:?}"
    );

    let report = admm.print_info(&params).expect("ok");
    assert!(report.total_w_z_error < 1e-4);
    assert_abs_diff_eq!(report.target_sparsity(), 0.5);
    assert_abs_diff_eq!(report.small_sparsity(), 0.5);

    // Retrain stage: mask frozen from |W|, ADMM state dropped.
    let retrain = RetrainOperator::new(&params, &spec).expect("valid spec");
    drop(admm);
    assert_eq!(
        retrain.mask("fc.weight").map(|m| m.values().clone()),
        Some(arr1(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]))
    );
    retrain.apply_mask(&mut params).expect("shapes match");

    for _ in 0..50 {
        backward(&mut params, &target);
        sgd_step(&mut params, lr);
        retrain.apply_mask(&mut params).expect("shapes match");

        let w = params.get("fc.weight").expect("exists");
        for i in [1, 3, 5, 7] {
            assert_eq!(w.data()[i], 0.0, "pruned element {i} drifted");
        }
    }

    let final_report = retrain.print_info(&params).expect("ok");
    assert_eq!(final_report.total_pruned, 4);
    assert_eq!(final_report.total_elements, 8);
    assert_abs_diff_eq!(final_report.pruned_percent(), 50.0);

    // Kept weights recover toward the dense target.
    let w = params.get("fc.weight").expect("exists");
    for i in [0, 2, 4, 6] {
        assert_abs_diff_eq!(w.data()[i], TARGET[i], epsilon = 1e-3);
    }

    // Untracked parameters are never touched by either operator.
    let (name, bias) = params.parameter(1).expect("bias exists");
    assert_eq!(name, "fc.bias");
    assert_eq!(bias.data()[0], 0.0);
}

#[test]
fn test_multiple_tensors_with_mixed_fractions() {
    let mut params = NamedParameters::new();
    params.insert(
        "conv.weight",
        Tensor::from_shape_vec(&[2, 2, 2], vec![0.8, -0.1, 0.5, 0.05, -0.3, 0.9, 0.2, -0.6], true)
            .expect("shape"),
    );
    params.insert("conv.bias", Tensor::from_vec(vec![0.1, 0.2], true));
    params.insert(
        "fc.weight",
        Tensor::from_shape_vec(&[1, 5], vec![0.5, 0.4, 0.3, 0.2, 0.1], true).expect("shape"),
    );
    let spec = SparsitySpec::from_pairs([("fc.weight", 0.6), ("conv.weight", 0.75)]);

    let mut admm = AdmmOperator::new(&params, &spec, AdmmConfig::default()).expect("valid spec");
    let outcome = admm.update(&params, 0).expect("ok");
    let kept: Vec<usize> = outcome.records().iter().map(|r| r.kept).collect();
    // conv: k = 6 of 8 -> 2 kept; fc: k = 3 of 5 -> 2 kept
    assert_eq!(kept, vec![2, 2]);

    let report = admm.report(&params).expect("ok");
    assert_eq!(report.tensors[0].name, "conv.weight");
    assert_eq!(report.tensors[0].zero_count, 6);
    assert_eq!(report.tensors[1].zero_count, 3);
    assert_eq!(report.total_pruned, 9);
    assert_eq!(report.total_elements, 13);
}
