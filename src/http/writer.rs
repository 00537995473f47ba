//! Raw response writers.
//!
//! # Responsibilities
//! - Model a low-level HTTP response writer (headers, status line, body stream)
//! - Provide an in-memory writer for tests and buffering
//! - Provide an HTTP/1.1 writer over any byte stream
//!
//! # Design Decisions
//! - The first body write implies `200 OK` if no status was written
//! - A second status write is ignored and logged, the first one wins
//! - The stream writer delimits the body by closing the connection

use std::io::{self, Write};

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;

use crate::http::adapter::{WriteJson, APPLICATION_JSON};
use crate::response::code::reason_phrase;
use crate::response::error::{ResponseError, ResponseResult};

/// A response under construction: header map, status line, body stream.
pub trait ResponseWriter: Write {
    /// Headers sent with the status line. Changes after
    /// [`write_status`](Self::write_status) have no effect.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Send the status line and headers.
    fn write_status(&mut self, status: StatusCode) -> io::Result<()>;
}

/// Adapter for raw [`ResponseWriter`] sinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterAdapter;

impl WriteJson for WriterAdapter {
    type Sink = dyn ResponseWriter;

    fn write_json<T: Serialize + ?Sized>(
        &self,
        sink: &mut Self::Sink,
        status: StatusCode,
        body: &T,
    ) -> ResponseResult {
        sink.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        sink.write_status(status)?;

        // serde_json wraps sink failures; surface those as I/O errors.
        serde_json::to_writer(&mut *sink, body).map_err(|err| {
            if err.is_io() {
                ResponseError::Io(err.into())
            } else {
                ResponseError::Encode(err)
            }
        })?;
        sink.write_all(b"\n")?;
        sink.flush()?;
        Ok(())
    }
}

/// In-memory response writer.
#[derive(Debug, Default)]
pub struct Recorder {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Written status, `200 OK` if none was written.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, lossily.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Whether a status has been written.
    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }
}

impl Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResponseWriter for Recorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) -> io::Result<()> {
        match self.status {
            Some(current) => {
                tracing::warn!(
                    current = current.as_u16(),
                    ignored = status.as_u16(),
                    "superfluous status write"
                );
            }
            None => self.status = Some(status),
        }
        Ok(())
    }
}

/// HTTP/1.1 response writer over a byte stream such as a `TcpStream`.
///
/// The head is sent on the first status write. No `Content-Length` is
/// emitted; the body ends when the stream is closed.
#[derive(Debug)]
pub struct StreamWriter<W> {
    inner: W,
    headers: HeaderMap,
    status: Option<StatusCode>,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            headers: HeaderMap::new(),
            status: None,
        }
    }

    /// Status sent on the wire, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_head(&mut self, status: StatusCode) -> io::Result<()> {
        write!(
            self.inner,
            "HTTP/1.1 {} {}\r\n",
            status.as_str(),
            reason_phrase(status)
        )?;

        if !self.headers.contains_key(header::CONNECTION) {
            self.headers
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
        }
        for (name, value) in &self.headers {
            self.inner.write_all(name.as_str().as_bytes())?;
            self.inner.write_all(b": ")?;
            self.inner.write_all(value.as_bytes())?;
            self.inner.write_all(b"\r\n")?;
        }
        self.inner.write_all(b"\r\n")
    }
}

impl<W: Write> Write for StreamWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.write_status(StatusCode::OK)?;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> ResponseWriter for StreamWriter<W> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) -> io::Result<()> {
        if let Some(current) = self.status {
            tracing::warn!(
                current = current.as_u16(),
                ignored = status.as_u16(),
                "superfluous status write"
            );
            return Ok(());
        }

        self.write_head(status)?;
        self.status = Some(status);
        Ok(())
    }
}
