//! Uniform JSON success/error envelopes for HTTP handlers.
//!
//! A [`Responder`] builds the envelope and writes it through a [`WriteJson`]
//! adapter chosen at construction, one per response-writing mechanism:
//! raw writers ([`WriterAdapter`]), axum ([`AxumAdapter`]), hyper
//! ([`HyperAdapter`]) or any of them picked at runtime ([`AnyAdapter`]).
//!
//! ```ignore
//! let responder = Responder::new(AxumAdapter, ResponderConfig::default());
//! let mut response: Response = Response::default();
//! responder.success_with_code(&ctx, &mut response, StatusCode::CREATED, json!({"id": 1}), "created")?;
//! // {"status":"success","code":"CREATED","message":"created","data":{"id":1}}
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod response;

pub use config::AppConfig;
pub use http::{
    AnyAdapter, AxumAdapter, HttpServer, HyperAdapter, HyperResponse, Recorder, RequestContext,
    ResponseWriter, StreamWriter, WriteJson, WriterAdapter,
};
pub use observability::{ErrorLogger, LogAttr, TracingLogger};
pub use response::{
    ErrorEnvelope, Responder, ResponderConfig, ResponseError, ResponseResult, Status,
    SuccessEnvelope,
};
