//! Hyper integration for `service_fn` style servers.

use axum::http::{header, HeaderValue, StatusCode};
use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;

use crate::http::adapter::{WriteJson, APPLICATION_JSON};
use crate::response::error::ResponseResult;

/// Response type produced by hyper services with buffered bodies.
pub type HyperResponse = hyper::Response<Full<Bytes>>;

/// Adapter rebuilding a [`HyperResponse`] through `hyper::Response::builder`.
///
/// Headers and HTTP version of the previous response are carried over.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyperAdapter;

impl WriteJson for HyperAdapter {
    type Sink = HyperResponse;

    fn write_json<T: Serialize + ?Sized>(
        &self,
        sink: &mut HyperResponse,
        status: StatusCode,
        body: &T,
    ) -> ResponseResult {
        let bytes = serde_json::to_vec(body)?;

        let mut builder = hyper::Response::builder()
            .status(status)
            .version(sink.version());
        if let Some(headers) = builder.headers_mut() {
            headers.extend(sink.headers().clone());
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        *sink = builder.body(Full::new(Bytes::from(bytes)))?;
        Ok(())
    }
}
