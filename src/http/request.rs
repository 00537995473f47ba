//! Per-request context threaded through the responder.
//!
//! # Responsibilities
//! - Carry the request id (`x-request-id`) to the error logger
//! - Supply the envelope `tracer_id` when exposure is enabled
//!
//! # Design Decisions
//! - The context is read-only; it never cancels or delays a write
//! - Blank or non-UTF-8 header values count as absent

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

/// Header carrying the request id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request-scoped values the responder may consult.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Option<String>,
}

impl RequestContext {
    /// Context without a request id.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        let request_id = request_id.into();
        Self {
            request_id: (!request_id.is_empty()).then_some(request_id),
        }
    }

    /// Context with a fresh UUID v4 request id.
    pub fn generate() -> Self {
        Self::with_request_id(Uuid::new_v4().to_string())
    }

    /// Read the request id from `x-request-id`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self { request_id }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
