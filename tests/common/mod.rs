//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use http_body_util::BodyExt;
use json_responder::{AppConfig, ErrorLogger, HttpServer, HyperResponse, LogAttr, RequestContext};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One call received by [`RecordingLogger`].
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct LoggedError {
    pub request_id: Option<String>,
    pub message: String,
    pub attrs: Vec<LogAttr>,
}

/// Logger keeping every event in memory.
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<LoggedError>>,
}

#[allow(dead_code)]
impl RecordingLogger {
    pub fn events(&self) -> Vec<LoggedError> {
        self.events.lock().unwrap().clone()
    }
}

impl ErrorLogger for RecordingLogger {
    fn error(&self, ctx: &RequestContext, message: &str, attrs: &[LogAttr]) {
        self.events.lock().unwrap().push(LoggedError {
            request_id: ctx.request_id().map(str::to_string),
            message: message.to_string(),
            attrs: attrs.to_vec(),
        });
    }
}

/// Decode an axum response body as JSON.
#[allow(dead_code)]
pub async fn axum_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Decode a hyper response body as JSON.
#[allow(dead_code)]
pub async fn hyper_json(response: HyperResponse) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Running server plus the handle that stops it.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Start the envelope server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig, logger: Option<Arc<dyn ErrorLogger>>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    let server = HttpServer::new(config, logger);
    tokio::spawn(async move {
        let _ = server
            .run(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    TestServer {
        addr,
        shutdown: Some(tx),
    }
}
