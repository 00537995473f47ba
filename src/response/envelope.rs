//! Envelope types written on the wire.
//!
//! ```text
//! {"status":"success","code":"CREATED","message":"...","data":{...}}
//! {"status":"error","code":"BAD_REQUEST","message":"...","errors":["..."]}
//! ```
//!
//! `tracer_id` is only present when non-empty.

use serde::{Deserialize, Serialize};

/// Outcome carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Fields shared by every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,

    /// Derived from the HTTP reason phrase, or a caller-supplied token.
    pub code: String,

    pub message: String,

    /// Correlation id for the request, omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tracer_id: String,
}

/// Envelope for successful responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope<D> {
    #[serde(flatten)]
    pub envelope: Envelope,

    pub data: D,
}

/// Envelope for error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(flatten)]
    pub envelope: Envelope,

    /// Error text, one entry per line.
    pub errors: Vec<String>,
}

impl ErrorEnvelope {
    /// Split an error's text on `\n` boundaries, preserving order.
    ///
    /// Empty text yields a single empty entry.
    pub fn split_errors(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }
}
