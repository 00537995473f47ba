//! Adapter that picks the write strategy from the sink's concrete type.
//!
//! Useful when one responder is shared by handlers of several frameworks.
//! Prefer the statically typed adapters otherwise: they make an unsupported
//! sink a compile error instead of a panic.

use std::any::Any;
use std::net::TcpStream;

use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

use crate::http::adapter::WriteJson;
use crate::http::axum_adapter::AxumAdapter;
use crate::http::hyper_adapter::{HyperAdapter, HyperResponse};
use crate::http::writer::{Recorder, ResponseWriter, StreamWriter, WriterAdapter};
use crate::response::error::ResponseResult;

/// Dispatches on the runtime type of a `dyn Any` sink.
///
/// Recognized sinks:
/// - [`axum::response::Response`]
/// - [`HyperResponse`]
/// - [`Recorder`]
/// - [`StreamWriter`] over a `Vec<u8>` or a `std::net::TcpStream`
/// - `Box<dyn ResponseWriter>`
///
/// Any other [`ResponseWriter`] must be passed boxed, since `Any` can only
/// recover concrete types that are named here.
///
/// # Panics
///
/// Any other sink type is a programming error and panics rather than
/// leaving the response unwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyAdapter;

impl WriteJson for AnyAdapter {
    type Sink = dyn Any;

    fn write_json<T: Serialize + ?Sized>(
        &self,
        sink: &mut Self::Sink,
        status: StatusCode,
        body: &T,
    ) -> ResponseResult {
        if let Some(response) = sink.downcast_mut::<Response>() {
            return AxumAdapter.write_json(response, status, body);
        }
        if let Some(response) = sink.downcast_mut::<HyperResponse>() {
            return HyperAdapter.write_json(response, status, body);
        }
        if let Some(recorder) = sink.downcast_mut::<Recorder>() {
            return WriterAdapter.write_json(recorder as &mut dyn ResponseWriter, status, body);
        }
        if let Some(writer) = sink.downcast_mut::<StreamWriter<Vec<u8>>>() {
            return WriterAdapter.write_json(writer as &mut dyn ResponseWriter, status, body);
        }
        if let Some(writer) = sink.downcast_mut::<StreamWriter<TcpStream>>() {
            return WriterAdapter.write_json(writer as &mut dyn ResponseWriter, status, body);
        }
        if let Some(writer) = sink.downcast_mut::<Box<dyn ResponseWriter>>() {
            return WriterAdapter.write_json(&mut **writer, status, body);
        }

        panic!("unsupported response writer type");
    }
}
