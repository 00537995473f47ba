//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Define the error-logging collaborator used by the responder
//!
//! # Design Decisions
//! - JSON format for production, pretty format for development
//! - `RUST_LOG` takes precedence over the configured level

use std::fmt;

use serde_json::{Map, Value};
use tracing_subscriber::{
    fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

use crate::config::schema::{LogFormat, LoggingConfig};
use crate::http::request::RequestContext;

/// Key/value pair attached to a log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogAttr {
    pub key: String,
    pub value: String,
}

impl LogAttr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for LogAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.key, self.value)
    }
}

/// Receives error-path events from the responder.
///
/// Implementations must not block the caller for long; the response is
/// written after `error` returns.
pub trait ErrorLogger: Send + Sync {
    fn error(&self, ctx: &RequestContext, message: &str, attrs: &[LogAttr]);
}

/// [`ErrorLogger`] emitting one `tracing::error!` event per call.
///
/// Tracing field names are fixed at compile time, so only `request_id` and
/// `error` are recorded as their own fields. The remaining attributes go
/// into one `attrs` field holding a JSON object, e.g.
/// `attrs={"service":"orders"}`, which log pipelines can parse back into
/// keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn error(&self, ctx: &RequestContext, message: &str, attrs: &[LogAttr]) {
        let (error, rest) = split_error_attr(attrs);
        tracing::error!(
            request_id = ctx.request_id().unwrap_or("-"),
            error,
            attrs = %attrs_object(&rest),
            "{}",
            message
        );
    }
}

/// Pull out the last `error` attribute; the others keep their order.
fn split_error_attr(attrs: &[LogAttr]) -> (&str, Vec<&LogAttr>) {
    let mut error = "";
    let mut rest = Vec::with_capacity(attrs.len());
    for attr in attrs {
        if attr.key == "error" {
            error = &attr.value;
        } else {
            rest.push(attr);
        }
    }
    (error, rest)
}

/// JSON object of `attrs`. A repeated key keeps its last value.
fn attrs_object(attrs: &[&LogAttr]) -> Value {
    let map: Map<String, Value> = attrs
        .iter()
        .map(|attr| (attr.key.clone(), Value::String(attr.value.clone())))
        .collect();
    Value::Object(map)
}

/// Build the level filter: `RUST_LOG` first, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.format {
        LogFormat::Json => registry.with(tracing_fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(tracing_fmt::layer()).try_init(),
    }
}
