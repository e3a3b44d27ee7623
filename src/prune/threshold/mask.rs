//! Binary sparsity masks

use crate::error::{Error, Result};
use crate::Tensor;
use ndarray::Array1;

/// Binary mask over a flat buffer (1.0 = keep, 0.0 = prune).
///
/// # Invariants
/// - every value is exactly 0.0 or 1.0
/// - the product of `shape` equals the number of values
#[derive(Debug, Clone, PartialEq)]
pub struct SparsityMask {
    values: Array1<f32>,
    shape: Vec<usize>,
}

impl SparsityMask {
    /// Mask values in flat order
    pub fn values(&self) -> &Array1<f32> {
        &self.values
    }

    /// Logical shape of the masked tensor
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of mask entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mask is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count of kept (1.0) entries
    pub fn nnz(&self) -> usize {
        self.values.iter().filter(|&&v| v == 1.0).count()
    }

    /// Count of pruned (0.0) entries
    pub fn num_zeros(&self) -> usize {
        self.len() - self.nnz()
    }

    /// Fraction of pruned entries (0.0 = dense)
    pub fn sparsity(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.num_zeros() as f32 / self.len() as f32
    }

    /// Multiply `weights` by the mask in place.
    pub fn apply(&self, weights: &mut Tensor) -> Result<()> {
        if weights.shape() != self.shape.as_slice() || weights.len() != self.values.len() {
            return Err(Error::ShapeMismatch {
                name: "mask".to_string(),
                expected: self.shape.clone(),
                actual: weights.shape().to_vec(),
            });
        }
        *weights.data_mut() *= &self.values;
        Ok(())
    }
}

/// Build a mask: 1.0 where `importance > threshold` (strict), else 0.0.
///
/// `shape` is carried as metadata; its element count must match
/// `importance.len()`.
pub fn build_mask(importance: &Array1<f32>, shape: &[usize], threshold: f32) -> Result<SparsityMask> {
    let numel: usize = shape.iter().product();
    if numel != importance.len() {
        return Err(Error::ShapeMismatch {
            name: "importance".to_string(),
            expected: shape.to_vec(),
            actual: vec![importance.len()],
        });
    }
    let values = importance.mapv(|v| if v > threshold { 1.0 } else { 0.0 });
    Ok(SparsityMask {
        values,
        shape: shape.to_vec(),
    })
}
