//! View-side fetch error types.

use thiserror::Error;

/// Errors from the view model's data source.
///
/// A failed refresh is terminal per attempt: the view keeps its last
/// known-good records and the next manual refresh is the only recovery
/// path.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Gateway returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode gateway response: {0}")]
    Decode(String),
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
