//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Responder error path
//!     → ErrorLogger (configured collaborator)
//!     → TracingLogger → tracing event
//!     → subscriber installed by logging::init_logging (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing` everywhere
//! - Log level from config, overridable with `RUST_LOG`

pub mod logging;

pub use logging::{init_logging, ErrorLogger, LogAttr, TracingLogger};
