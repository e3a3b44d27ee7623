//! Tensor with gradient buffer

use crate::error::{Error, Result};
use ndarray::Array1;

/// Parameter tensor: flat row-major data, logical shape, gradient buffer.
///
/// The data is always stored flat; `shape` is metadata whose product equals
/// `data.len()` for a well-formed tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array1<f32>,
    shape: Vec<usize>,
    grad: Option<Array1<f32>>,
    requires_grad: bool,
}

impl Tensor {
    /// Create a 1-D tensor from an ndarray buffer
    pub fn new(data: Array1<f32>, requires_grad: bool) -> Self {
        let shape = vec![data.len()];
        Self {
            data,
            shape,
            grad: None,
            requires_grad,
        }
    }

    /// Create a 1-D tensor from a vector
    pub fn from_vec(data: Vec<f32>, requires_grad: bool) -> Self {
        Self::new(Array1::from(data), requires_grad)
    }

    /// Create a tensor with an explicit shape.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the shape's element count
    /// differs from `data.len()`.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f32>, requires_grad: bool) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(Error::ShapeMismatch {
                name: "tensor".to_string(),
                expected: shape.to_vec(),
                actual: vec![data.len()],
            });
        }
        Ok(Self {
            data: Array1::from(data),
            shape: shape.to_vec(),
            grad: None,
            requires_grad,
        })
    }

    /// Logical shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat view of the values
    pub fn data(&self) -> &Array1<f32> {
        &self.data
    }

    /// Mutable flat view of the values
    pub fn data_mut(&mut self) -> &mut Array1<f32> {
        &mut self.data
    }

    /// Whether the tensor takes gradients. Frozen tensors are skipped by
    /// the ADMM penalty.
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Gradient buffer, if a backward pass has produced one
    pub fn grad(&self) -> Option<&Array1<f32>> {
        self.grad.as_ref()
    }

    /// Replace the gradient buffer
    pub fn set_grad(&mut self, grad: Array1<f32>) {
        self.grad = Some(grad);
    }

    /// Add `grad` to the gradient buffer, allocating a zero buffer first if
    /// none exists yet.
    pub fn accumulate_grad(&mut self, grad: Array1<f32>) {
        match &mut self.grad {
            Some(existing) => *existing += &grad,
            None => self.grad = Some(grad),
        }
    }

    /// Zero the gradient buffer in place (keeps the allocation)
    pub fn zero_grad(&mut self) {
        if let Some(grad) = &mut self.grad {
            grad.fill(0.0);
        }
    }

    /// Change the logical shape without touching the data.
    ///
    /// Fails with [`Error::ShapeMismatch`] if the element count differs.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let numel: usize = shape.iter().product();
        if numel != self.data.len() {
            return Err(Error::ShapeMismatch {
                name: "tensor".to_string(),
                expected: shape.to_vec(),
                actual: self.shape.clone(),
            });
        }
        self.shape = shape.to_vec();
        Ok(())
    }
}
