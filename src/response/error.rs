//! Errors raised while writing a response.

use thiserror::Error;

/// Failure on the write path. Returned to the caller, never retried.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The envelope could not be encoded as JSON.
    #[error("failed to encode response body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The sink rejected the bytes.
    #[error("failed to write response: {0}")]
    Io(#[from] std::io::Error),

    /// A framework response could not be assembled.
    #[error("failed to build response: {0}")]
    Http(#[from] axum::http::Error),
}

/// Result type for responder operations.
pub type ResponseResult<T = ()> = Result<T, ResponseError>;
