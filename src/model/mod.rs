//! Model parameter collaborator
//!
//! The pruning operators never own parameter storage. They address
//! parameters through a [`ParameterSet`]: an ordered enumeration of
//! `(identifier, tensor)` pairs supplied by the model.

mod named;


pub use named::NamedParameters;

use crate::Tensor;

/// Ordered, named view over a model's trainable parameters.
///
/// Positions are stable for the lifetime of a pruning run: the operators
/// record the position of each tracked parameter once and revisit it on every
/// call.
pub trait ParameterSet {
    /// Number of parameters in the enumeration
    fn num_parameters(&self) -> usize;

    /// Parameter at `index` with its identifier
    fn parameter(&self, index: usize) -> Option<(&str, &Tensor)>;

    /// Mutable parameter at `index` with its identifier
    fn parameter_mut(&mut self, index: usize) -> Option<(&str, &mut Tensor)>;

    /// Identifiers in enumeration order
    fn parameter_names(&self) -> Vec<&str> {
        (0..self.num_parameters())
            .filter_map(|i| self.parameter(i).map(|(name, _)| name))
            .collect()
    }
}
