//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Responder
//!     → adapter.rs (WriteJson strategy, chosen at construction)
//!         → writer.rs  (raw ResponseWriter: Recorder, StreamWriter)
//!         → axum_adapter.rs  (axum::response::Response)
//!         → hyper_adapter.rs (hyper::Response<Full<Bytes>>)
//!         → dynamic.rs (dyn Any, dispatch by concrete type)
//!     → sink
//!
//! request.rs extracts the RequestContext (x-request-id) per request.
//! server.rs wires a demo axum router around an AxumAdapter responder.
//! ```
//!
//! # Design Decisions
//! - Every adapter sets `Content-Type: application/json` before writing
//! - Statically typed adapters cannot fail on an unknown sink; only the
//!   dynamic adapter can, and it panics instead of dropping the response

pub mod adapter;
pub mod axum_adapter;
pub mod dynamic;
pub mod hyper_adapter;
pub mod request;
pub mod server;
pub mod writer;

pub use adapter::{WriteJson, APPLICATION_JSON};
pub use axum_adapter::AxumAdapter;
pub use dynamic::AnyAdapter;
pub use hyper_adapter::{HyperAdapter, HyperResponse};
pub use request::{RequestContext, X_REQUEST_ID};
pub use server::HttpServer;
pub use writer::{Recorder, ResponseWriter, StreamWriter, WriterAdapter};
