//! Errors raised while computing pairwise distances.

use thiserror::Error;

/// The ways in which a pairwise distance computation can fail.
///
/// Failures are atomic: no partial result is ever returned alongside an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairwiseError {
    /// The metric name is not recognized, or its parameters are malformed.
    #[error("Invalid metric: {0}")]
    InvalidMetric(String),

    /// The observations are too few or malformed, or a label is unknown.
    #[error("Shape error: {0}")]
    Shape(String),

    /// The requested parallelism cannot be satisfied.
    #[error("Resource error: {0}")]
    Resource(String),
}

/// Result type alias for pairwise distance operations.
pub type Result<T> = core::result::Result<T, PairwiseError>;
