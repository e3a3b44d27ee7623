//! Tests for parameter tensors

mod unit_tensor;
