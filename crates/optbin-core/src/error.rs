//! Error types for optimal binning
//!
//! Provides a unified error type for all optbin crates.

use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Every candidate a search strategy evaluated was degenerate
    #[error("No valid binning: all {candidates} {strategy} search candidates were degenerate")]
    DegenerateSearch {
        strategy: &'static str,
        candidates: usize,
    },

    /// A model was queried before it was fitted
    #[error("Model is not fitted: call fit before transform")]
    NotFitted,
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a search that never produced a scorable candidate
    pub fn degenerate_search(strategy: &'static str, candidates: usize) -> Self {
        Self::DegenerateSearch {
            strategy,
            candidates,
        }
    }

    /// True for the input-validation family of errors
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::InvalidInput(_) | Self::InsufficientData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("max_bins must be at least 3".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: max_bins must be at least 3");

        let err = Error::InvalidInput("y contains negative weights".to_string());
        assert_eq!(err.to_string(), "Invalid input: y contains negative weights");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 10 samples, got 5");

        let err = Error::degenerate_search("merge", 7);
        assert_eq!(
            err.to_string(),
            "No valid binning: all 7 merge search candidates were degenerate"
        );

        assert_eq!(
            Error::NotFitted.to_string(),
            "Model is not fitted: call fit before transform"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input("fit") {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::size_mismatch(100, 50, "weight vector");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in weight vector: expected 100, got 50"
        );

        let err = Error::non_finite("x");
        assert_eq!(err.to_string(), "Invalid input: x contains NaN or infinite values");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::InvalidParameter(String::new()).is_invalid_input());
        assert!(Error::empty_input("fit").is_invalid_input());
        assert!(Error::size_mismatch(1, 2, "y").is_invalid_input());
        assert!(!Error::NotFitted.is_invalid_input());
        assert!(!Error::degenerate_search("stepwise", 1).is_invalid_input());
    }
}
