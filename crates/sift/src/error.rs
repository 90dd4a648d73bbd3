//! Error types for the sift crate.
//!
//! Query evaluation never fails. These errors only come from validating
//! configuration before it reaches the engine.

use thiserror::Error;

/// Errors raised when validating list configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiftError {
    /// Page size must be at least one item.
    #[error("items per page must be greater than zero")]
    InvalidPageSize,

    /// Minimum score is NaN or negative.
    #[error("minimum score must be a non-negative number, got {0}")]
    InvalidMinScore(f64),

    /// A field weight is not a positive, finite multiplier.
    #[error("weight for field '{field}' must be positive and finite, got {weight}")]
    InvalidWeight { field: String, weight: f64 },
}

/// Result type for sift configuration operations.
pub type Result<T> = std::result::Result<T, SiftError>;
