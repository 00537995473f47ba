//! JSON envelope demo server.
//!
//! Serves the envelope routes from `http::server` so the wire format can be
//! inspected with any HTTP client:
//!
//! ```text
//! $ curl -s localhost:2323/success
//! {"status":"success","code":"OK","message":"Hello, World!","data":null}
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use json_responder::config::{load_config, validate_config, AppConfig};
use json_responder::http::server::shutdown_signal;
use json_responder::observability::{init_logging, TracingLogger};
use json_responder::HttpServer;

#[derive(Parser)]
#[command(name = "json-responder")]
#[command(about = "Serve example handlers answering with JSON envelopes", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
        if let Err(errors) = validate_config(&config) {
            for error in &errors {
                eprintln!("invalid configuration: {}", error);
            }
            std::process::exit(2);
        }
    }

    init_logging(&config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.server.bind_address,
        error_logging = config.responder.error_log_message.is_some(),
        expose_tracer_id = config.responder.expose_tracer_id,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let server = HttpServer::new(config, Some(Arc::new(TracingLogger)));
    server.run(listener, shutdown_signal()).await?;

    Ok(())
}
