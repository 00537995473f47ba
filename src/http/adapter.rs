//! Write strategy shared by every sink integration.

use axum::http::StatusCode;
use serde::Serialize;

use crate::response::error::ResponseResult;

/// Content type set on every envelope.
pub const APPLICATION_JSON: &str = "application/json";

/// Writes a serialized body with a status into a sink of type `Sink`.
///
/// One implementation exists per framework integration. The responder is
/// generic over it, so the sink type is fixed when the responder is built.
pub trait WriteJson {
    /// Where the response ends up.
    type Sink: ?Sized;

    /// Set the JSON content type, the status, and the encoded `body`.
    fn write_json<T: Serialize + ?Sized>(
        &self,
        sink: &mut Self::Sink,
        status: StatusCode,
        body: &T,
    ) -> ResponseResult;
}
