//! Error types for taowatch-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
