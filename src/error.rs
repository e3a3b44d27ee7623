//! Error types for pruning operations

use thiserror::Error;

/// Errors raised by the pruning operators and their collaborators.
///
/// Every variant is a construction-time or shape-invariant violation. None of
/// them is retried; they abort the current operation and surface to the
/// training loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A tracked tensor's live shape differs from the shape recorded when it
    /// was put under pruning control.
    #[error("Shape mismatch for '{name}': expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// The parameter collaborator no longer yields a tracked identifier at
    /// its recorded position.
    #[error("Tracked parameter '{name}' missing at position {index}")]
    ParameterMissing { name: String, index: usize },

    /// Sparsity spec or operator settings rejected at construction.
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for pruning operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ShapeMismatch {
            name: "fc.weight".to_string(),
            expected: vec![2, 2],
            actual: vec![4],
        };
        let msg = err.to_string();
        assert!(msg.contains("fc.weight"));
        assert!(msg.contains("[2, 2]"));
        assert!(msg.contains("[4]"));

        let err = Error::ParameterMissing {
            name: "conv1.weight".to_string(),
            index: 3,
        };
        assert!(err.to_string().contains("conv1.weight"));
        assert!(err.to_string().contains('3'));

        let err = Error::UnsupportedConfiguration("fraction 1.5".to_string());
        assert!(err.to_string().contains("Unsupported configuration"));
        assert!(err.to_string().contains("1.5"));

        let err = Error::Config("bad yaml".to_string());
        assert!(err.to_string().contains("bad yaml"));
    }

    #[test]
    fn test_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<Error>();
    }
}
