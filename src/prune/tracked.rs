//! Tracked tensor records and collaborator binding

use crate::error::{Error, Result};
use crate::model::ParameterSet;
use crate::prune::spec::SparsitySpec;
use crate::Tensor;
use serde::{Deserialize, Serialize};

/// One parameter under pruning control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedTensor {
    /// Parameter identifier
    pub name: String,
    /// Position in the collaborator's enumeration
    pub index: usize,
    /// Shape at tracking time
    pub shape: Vec<usize>,
    /// Element count (product of `shape`)
    pub numel: usize,
    /// Target fraction in `[0, 1]`
    pub fraction: f64,
}

impl TrackedTensor {
    fn check(&self, name: &str, tensor: &Tensor) -> Result<()> {
        if name != self.name {
            return Err(Error::ParameterMissing {
                name: self.name.clone(),
                index: self.index,
            });
        }
        if tensor.shape() != self.shape.as_slice() || tensor.len() != self.numel {
            return Err(Error::ShapeMismatch {
                name: self.name.clone(),
                expected: self.shape.clone(),
                actual: tensor.shape().to_vec(),
            });
        }
        Ok(())
    }

    /// Resolve the live tensor, verifying identifier and shape.
    pub fn resolve<'a, P: ParameterSet + ?Sized>(&self, params: &'a P) -> Result<&'a Tensor> {
        let (name, tensor) = params.parameter(self.index).ok_or_else(|| Error::ParameterMissing {
            name: self.name.clone(),
            index: self.index,
        })?;
        self.check(name, tensor)?;
        Ok(tensor)
    }

    /// Mutable form of [`resolve`](Self::resolve).
    pub fn resolve_mut<'a, P: ParameterSet + ?Sized>(
        &self,
        params: &'a mut P,
    ) -> Result<&'a mut Tensor> {
        let (name, tensor) =
            params
                .parameter_mut(self.index)
                .ok_or_else(|| Error::ParameterMissing {
                    name: self.name.clone(),
                    index: self.index,
                })?;
        self.check(name, tensor)?;
        Ok(tensor)
    }
}

/// Select the parameters named in `spec`, in enumeration order.
///
/// Fails with [`Error::UnsupportedConfiguration`] if the spec carries an
/// invalid fraction or an identifier the model does not expose.
pub fn select_tracked<P: ParameterSet + ?Sized>(
    params: &P,
    spec: &SparsitySpec,
) -> Result<Vec<TrackedTensor>> {
    spec.validate()?;

    let mut tracked = Vec::with_capacity(spec.len());
    for index in 0..params.num_parameters() {
        let Some((name, tensor)) = params.parameter(index) else {
            continue;
        };
        let Some(fraction) = spec.lookup(name) else {
            continue;
        };
        let numel: usize = tensor.shape().iter().product();
        if numel != tensor.len() {
            return Err(Error::ShapeMismatch {
                name: name.to_string(),
                expected: tensor.shape().to_vec(),
                actual: vec![tensor.len()],
            });
        }
        tracked.push(TrackedTensor {
            name: name.to_string(),
            index,
            shape: tensor.shape().to_vec(),
            numel,
            fraction,
        });
    }

    if let Some((missing, _)) = spec
        .iter()
        .find(|(name, _)| !tracked.iter().any(|t| t.name == *name))
    {
        return Err(Error::UnsupportedConfiguration(format!(
            "sparsity spec names '{missing}' but the model has no such parameter (available: {})",
            params.parameter_names().join(", ")
        )));
    }

    Ok(tracked)
}
