//! Error types for pointplot

use thiserror::Error;

/// Main error type for pointplot operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Matrix dimension mismatch: expected {expected} entries, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for pointplot operations
pub type Result<T> = std::result::Result<T, Error>;
