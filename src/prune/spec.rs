//! Per-parameter target fractions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from parameter identifier to its target fraction in `[0, 1]`.
///
/// The fraction sets the rank of the threshold order statistic (see
/// [`crate::prune::threshold`]). Identifiers absent from the spec are not
/// tracked at all.
///
/// # Example
///
/// ```
/// use podar::prune::SparsitySpec;
///
/// let spec = SparsitySpec::from_pairs([
///     ("features.3.weight", 0.8),
///     ("classifier.1.weight", 0.95),
/// ]);
/// assert_eq!(spec.lookup("features.3.weight"), Some(0.8));
/// assert_eq!(spec.lookup("features.3.bias"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparsitySpec {
    fractions: BTreeMap<String, f64>,
}

impl SparsitySpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from `(identifier, fraction)` pairs
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        pairs.into_iter().collect()
    }

    /// Set the fraction for an identifier
    pub fn insert(&mut self, name: impl Into<String>, fraction: f64) {
        self.fractions.insert(name.into(), fraction);
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, fraction: f64) -> Self {
        self.insert(name, fraction);
        self
    }

    /// Target fraction for `name`, if tracked
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.fractions.get(name).copied()
    }

    /// Whether `name` is tracked
    pub fn contains(&self, name: &str) -> bool {
        self.fractions.contains_key(name)
    }

    /// Iterate `(identifier, fraction)` in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fractions.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of identifiers
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// Whether the spec is empty
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Reject fractions that are non-finite or outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, &fraction) in &self.fractions {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(Error::UnsupportedConfiguration(format!(
                    "fraction {fraction} for '{name}' must be in [0.0, 1.0]"
                )));
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SparsitySpec {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            fractions: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
