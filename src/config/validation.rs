//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address and log filter parse
//! - Reject blank log messages and attribute keys
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("logging.level '{0}' is not a valid filter directive")]
    InvalidLogLevel(String),

    #[error("responder.error_log_message must not be blank")]
    BlankErrorLogMessage,

    #[error("responder.log_attrs contains a blank key")]
    BlankAttrKey,
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if EnvFilter::try_new(&config.logging.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    if let Some(message) = &config.responder.error_log_message {
        if message.trim().is_empty() {
            errors.push(ValidationError::BlankErrorLogMessage);
        }
    }

    if config.responder.log_attrs.keys().any(|key| key.trim().is_empty()) {
        errors.push(ValidationError::BlankAttrKey);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
