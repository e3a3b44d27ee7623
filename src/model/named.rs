//! Ordered named parameter store

use super::ParameterSet;
use crate::Tensor;

/// Insertion-ordered list of named parameters.
///
/// Inserting an existing name replaces the tensor in place and keeps its
/// position.
#[derive(Debug, Clone, Default)]
pub struct NamedParameters {
    entries: Vec<(String, Tensor)>,
}

impl NamedParameters {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, tensor: Tensor) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = tensor,
            None => self.entries.push((name, tensor)),
        }
    }

    /// Look up a parameter by name
    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    /// Mutable lookup by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Remove a parameter, shifting later positions down
    pub fn remove(&mut self, name: &str) -> Option<Tensor> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate `(name, tensor)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tensor)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Iterate mutable tensors in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Tensor)> {
        self.entries.iter_mut().map(|(n, t)| (n.as_str(), t))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Tensor)> for NamedParameters {
    fn from_iter<I: IntoIterator<Item = (S, Tensor)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, tensor) in iter {
            params.insert(name, tensor);
        }
        params
    }
}

impl ParameterSet for NamedParameters {
    fn num_parameters(&self) -> usize {
        self.entries.len()
    }

    fn parameter(&self, index: usize) -> Option<(&str, &Tensor)> {
        self.entries.get(index).map(|(n, t)| (n.as_str(), t))
    }

    fn parameter_mut(&mut self, index: usize) -> Option<(&str, &mut Tensor)> {
        self.entries.get_mut(index).map(|(n, t)| (n.as_str(), t))
    }
}
