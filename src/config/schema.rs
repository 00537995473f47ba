//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener for the bundled server.
    pub server: ServerConfig,

    /// Subscriber settings.
    pub logging: LoggingConfig,

    /// Responder behaviour.
    pub responder: ResponderSettings,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:2323").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:2323".to_string(),
        }
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info", "json_responder=debug").
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// File-backed part of the responder configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ResponderSettings {
    /// Message of the error log event. `None` disables error logging.
    pub error_log_message: Option<String>,

    /// Fixed attributes added to every error log event.
    pub log_attrs: BTreeMap<String, String>,

    /// Echo the request id back as `tracer_id`.
    pub expose_tracer_id: bool,
}

impl Default for ResponderSettings {
    fn default() -> Self {
        Self {
            error_log_message: Some("response error".to_string()),
            log_attrs: BTreeMap::new(),
            expose_tracer_id: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "127.0.0.1:2323");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(
            config.responder.error_log_message.as_deref(),
            Some("response error")
        );
        assert!(!config.responder.expose_tracer_id);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [logging]
            format = "json"

            [responder.log_attrs]
            service = "orders"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.responder.log_attrs["service"], "orders");
        assert_eq!(config.server, ServerConfig::default());
    }
}
