//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the envelope demo handlers
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener and shut down gracefully
//!
//! # Routes
//! - `GET /success`: 200 envelope with `null` data
//! - `POST /success-with-code`: 201 envelope with `{"id": 1}`
//! - `POST /err`: 400 envelope with a derived code
//! - `POST /err-with-custom-code`: 400 envelope with a custom code
//! - `GET /health`: 200 envelope with the crate version

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::axum_adapter::AxumAdapter;
use crate::http::request::RequestContext;
use crate::observability::logging::ErrorLogger;
use crate::response::{Responder, ResponderConfig, ResponseError};

/// Error code returned by `POST /err-with-custom-code`.
pub const FIELD_REQUIRED_CODE: &str = "BAD_REQUEST_FIELD_REQUIRED";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder<AxumAdapter>>,
}

/// Business error surfaced by the demo submit handlers.
#[derive(Debug, Error)]
enum SubmitError {
    #[error("field 'name' is required")]
    MissingName,
}

/// HTTP server answering with JSON envelopes.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig, logger: Option<Arc<dyn ErrorLogger>>) -> Self {
        let responder_config = ResponderConfig::from_settings(&config.responder, logger);
        let state = AppState {
            responder: Arc::new(Responder::new(AxumAdapter, responder_config)),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/success", get(success))
            .route("/success-with-code", post(success_with_code))
            .route("/err", post(err))
            .route("/err-with-custom-code", post(err_with_custom_code))
            .route("/health", get(health))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Router with state and middleware applied, for embedding or tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn success(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ResponseError> {
    let mut response: Response = Response::default();
    state
        .responder
        .success(&ctx, &mut response, (), "Hello, World!")?;
    Ok(response)
}

async fn success_with_code(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ResponseError> {
    let mut response: Response = Response::default();
    state.responder.success_with_code(
        &ctx,
        &mut response,
        StatusCode::CREATED,
        json!({"id": 1}),
        "data has been successfully created",
    )?;
    Ok(response)
}

async fn err(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ResponseError> {
    let mut response: Response = Response::default();
    state.responder.error(
        &ctx,
        &mut response,
        StatusCode::BAD_REQUEST,
        &SubmitError::MissingName,
        "failed to submit data",
    )?;
    Ok(response)
}

async fn err_with_custom_code(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ResponseError> {
    let mut response: Response = Response::default();
    state.responder.error_custom_code(
        &ctx,
        &mut response,
        StatusCode::BAD_REQUEST,
        FIELD_REQUIRED_CODE,
        &SubmitError::MissingName,
        "failed to submit data",
    )?;
    Ok(response)
}

async fn health(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ResponseError> {
    let mut response: Response = Response::default();
    state.responder.success(
        &ctx,
        &mut response,
        json!({"version": env!("CARGO_PKG_VERSION")}),
        "operational",
    )?;
    Ok(response)
}

/// Wait for Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
