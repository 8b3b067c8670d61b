//! Error types for structured error handling.
//!
//! Every fallible operation in the workspace returns [`ClusterError`]. The
//! variants map onto three failure classes:
//! - `Validation`: a supplied value violates a constraint (non-positive
//!   radius, wrong dimensionality, mismatched lengths, bad bin edges)
//! - `State`: an operation was attempted on an unconfigured or already
//!   configured object
//! - `NotSupported`: the input kind is well formed but not handled
//!   (integer marks)

use thiserror::Error;

/// Categorised clustering errors.
///
/// # Examples
/// ```
/// use clustering_core::types::ClusterError;
///
/// let err = ClusterError::Validation("radius must be positive".to_string());
/// assert_eq!(format!("{}", err), "Validation error: radius must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// A supplied value violates a constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The object is not in a state that permits the operation.
    #[error("State error: {0}")]
    State(String),

    /// The input kind is not supported by the operation.
    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl ClusterError {
    /// Builds the `State` error raised when a parameter is read before it is set.
    pub fn not_configured(name: &str) -> Self {
        ClusterError::State(format!("{name} is not set"))
    }

    /// Builds the `Validation` error raised for a non-positive parameter.
    pub fn non_positive(name: &str, value: f64) -> Self {
        ClusterError::Validation(format!("{name} must be positive, got {value}"))
    }

    /// Returns `true` for the `Validation` variant.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClusterError::Validation(_))
    }

    /// Returns `true` for the `State` variant.
    pub fn is_state(&self) -> bool {
        matches!(self, ClusterError::State(_))
    }

    /// Returns `true` for the `NotSupported` variant.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, ClusterError::NotSupported(_))
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ClusterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_error_display() {
        let err = ClusterError::Validation("bad".to_string());
        assert_eq!(err.to_string(), "Validation error: bad");

        let err = ClusterError::State("boxsize is not set".to_string());
        assert_eq!(err.to_string(), "State error: boxsize is not set");

        let err = ClusterError::NotSupported("integer marks".to_string());
        assert_eq!(err.to_string(), "Not supported: integer marks");
    }

    #[test]
    fn test_helper_constructors() {
        let err = ClusterError::not_configured("radius");
        assert!(err.is_state());
        assert!(err.to_string().contains("radius is not set"));

        let err = ClusterError::non_positive("boxsize", -1.0);
        assert!(err.is_validation());
        assert!(err.to_string().contains("boxsize must be positive, got -1"));
    }

    #[test]
    fn test_variant_predicates_are_exclusive() {
        let err = ClusterError::NotSupported(String::new());
        assert!(err.is_not_supported());
        assert!(!err.is_validation());
        assert!(!err.is_state());
    }
}
