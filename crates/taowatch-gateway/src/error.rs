//! Gateway error types.

use thiserror::Error;

/// Errors raised while proxying the upstream statistics API.
///
/// These are logged server-side with detail; the HTTP surface maps every
/// variant to one generic failure body so neither the credential nor the
/// upstream endpoint is exposed to callers.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
