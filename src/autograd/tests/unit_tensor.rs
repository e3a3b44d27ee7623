//! Unit tests for tensor construction and gradient buffers

use crate::autograd::Tensor;
use crate::error::Error;
use approx::assert_abs_diff_eq;
use ndarray::arr1;

#[test]
fn test_tensor_creation() {
    let t = Tensor::from_vec(vec![1.0, 2.0, 3.0], true);
    assert_eq!(t.len(), 3);
    assert_eq!(t.shape(), &[3]);
    assert!(t.requires_grad());
    assert!(t.grad().is_none());
}

#[test]
fn test_tensor_from_shape_vec() {
    let t = Tensor::from_shape_vec(&[2, 3], vec![0.0; 6], false).expect("valid shape");
    assert_eq!(t.shape(), &[2, 3]);
    assert_eq!(t.len(), 6);
    assert!(!t.requires_grad());
}

#[test]
fn test_tensor_from_shape_vec_rejects_wrong_count() {
    let err = Tensor::from_shape_vec(&[2, 3], vec![0.0; 5], false).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_tensor_grad_accumulation() {
    let mut t = Tensor::from_vec(vec![1.0, 2.0, 3.0], true);

    t.accumulate_grad(arr1(&[1.0, 1.0, 1.0]));
    let grad1 = t.grad().expect("gradient should be available");
    assert_eq!(grad1[0], 1.0);

    t.accumulate_grad(arr1(&[1.0, 0.5, 1.0]));
    let grad2 = t.grad().expect("gradient should be available");
    assert_eq!(grad2[0], 2.0);
    assert_abs_diff_eq!(grad2[1], 1.5);
}

#[test]
fn test_tensor_zero_grad_keeps_buffer() {
    let mut t = Tensor::from_vec(vec![1.0, 2.0], true);
    t.set_grad(arr1(&[3.0, 4.0]));
    t.zero_grad();
    let grad = t.grad().expect("buffer kept after zeroing");
    assert!(grad.iter().all(|&g| g == 0.0));
}

#[test]
fn test_tensor_reshape() {
    let mut t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], true);
    t.reshape(&[2, 2]).expect("same element count");
    assert_eq!(t.shape(), &[2, 2]);
    assert!(t.reshape(&[3]).is_err());
    assert_eq!(t.shape(), &[2, 2]);
}

#[test]
fn test_tensor_data_mut() {
    let mut t = Tensor::from_vec(vec![1.0, 2.0], false);
    t.data_mut()[1] = 5.0;
    assert_eq!(t.data()[1], 5.0);
}
