//! The responder: builds envelopes and hands them to a write strategy.

use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use axum::http::StatusCode;
use serde::Serialize;

use crate::http::adapter::WriteJson;
use crate::http::request::RequestContext;
use crate::observability::logging::LogAttr;
use crate::response::code::{derive_code, reason_phrase};
use crate::response::config::ResponderConfig;
use crate::response::envelope::{Envelope, ErrorEnvelope, Status, SuccessEnvelope};
use crate::response::error::ResponseResult;

/// Writes uniform JSON envelopes through the adapter `A`.
///
/// Create one per application or router and share it; it is read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct Responder<A> {
    adapter: A,
    config: ResponderConfig,
}

impl<A: WriteJson> Responder<A> {
    pub fn new(adapter: A, config: ResponderConfig) -> Self {
        Self { adapter, config }
    }

    /// Write a `200 OK` success envelope.
    pub fn success<D: Serialize>(
        &self,
        ctx: &RequestContext,
        sink: &mut A::Sink,
        data: D,
        message: &str,
    ) -> ResponseResult {
        self.success_with_code(ctx, sink, StatusCode::OK, data, message)
    }

    /// Write a success envelope with an explicit status.
    pub fn success_with_code<D: Serialize>(
        &self,
        ctx: &RequestContext,
        sink: &mut A::Sink,
        status: StatusCode,
        data: D,
        message: &str,
    ) -> ResponseResult {
        let body = SuccessEnvelope {
            envelope: self.envelope(ctx, Status::Success, derive_code(status), message),
            data,
        };

        self.adapter.write_json(sink, status, &body)
    }

    /// Write an error envelope whose code is derived from `status`.
    ///
    /// An empty `message` falls back to the status reason phrase.
    pub fn error<E: Display + ?Sized>(
        &self,
        ctx: &RequestContext,
        sink: &mut A::Sink,
        status: StatusCode,
        err: &E,
        message: &str,
    ) -> ResponseResult {
        self.write_error(ctx, sink, status, derive_code(status), err, message)
    }

    /// Same as [`error`](Self::error) with `code` taken verbatim.
    pub fn error_custom_code<E: Display + ?Sized>(
        &self,
        ctx: &RequestContext,
        sink: &mut A::Sink,
        status: StatusCode,
        code: &str,
        err: &E,
        message: &str,
    ) -> ResponseResult {
        self.write_error(ctx, sink, status, code.to_string(), err, message)
    }

    fn write_error<E: Display + ?Sized>(
        &self,
        ctx: &RequestContext,
        sink: &mut A::Sink,
        status: StatusCode,
        code: String,
        err: &E,
        message: &str,
    ) -> ResponseResult {
        let message = if message.is_empty() {
            reason_phrase(status)
        } else {
            message
        };

        let text = err.to_string();
        self.log_error(ctx, &text);

        let body = ErrorEnvelope {
            envelope: self.envelope(ctx, Status::Error, code, message),
            errors: ErrorEnvelope::split_errors(&text),
        };

        self.adapter.write_json(sink, status, &body)
    }

    fn envelope(&self, ctx: &RequestContext, status: Status, code: String, message: &str) -> Envelope {
        let tracer_id = if self.config.expose_tracer_id {
            ctx.request_id().unwrap_or_default().to_string()
        } else {
            String::new()
        };

        Envelope {
            status,
            code,
            message: message.to_string(),
            tracer_id,
        }
    }

    fn log_error(&self, ctx: &RequestContext, error: &str) {
        let (Some(logger), Some(message)) = (&self.config.logger, &self.config.log_error_message)
        else {
            return;
        };
        if message.is_empty() {
            return;
        }

        let mut attrs = self.config.log_attrs.clone();
        attrs.push(LogAttr::new("error", error));

        // A misbehaving logger must not take the response down with it.
        let logged = panic::catch_unwind(AssertUnwindSafe(|| logger.error(ctx, message, &attrs)));
        if logged.is_err() {
            tracing::warn!(
                request_id = ctx.request_id().unwrap_or("-"),
                "error logger panicked, response written anyway"
            );
        }
    }
}
