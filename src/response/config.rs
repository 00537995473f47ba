//! Construction-time responder configuration.

use std::fmt;
use std::sync::Arc;

use crate::config::schema::ResponderSettings;
use crate::observability::logging::{ErrorLogger, LogAttr};

/// Options for [`Responder::new`](crate::response::Responder::new).
///
/// Errors are logged only when both `logger` and `log_error_message` are
/// set. The default configuration never logs and never exposes tracer ids.
#[derive(Clone, Default)]
pub struct ResponderConfig {
    /// Collaborator that receives error-path log events.
    pub logger: Option<Arc<dyn ErrorLogger>>,

    /// Message of the log event emitted for each error response.
    pub log_error_message: Option<String>,

    /// Fixed attributes attached to every error log event.
    pub log_attrs: Vec<LogAttr>,

    /// Copy the request id from the context into `tracer_id`.
    pub expose_tracer_id: bool,
}

impl ResponderConfig {
    /// Build from file-backed settings plus an optional logger.
    pub fn from_settings(
        settings: &ResponderSettings,
        logger: Option<Arc<dyn ErrorLogger>>,
    ) -> Self {
        Self {
            logger,
            log_error_message: settings.error_log_message.clone(),
            log_attrs: settings
                .log_attrs
                .iter()
                .map(|(key, value)| LogAttr::new(key.clone(), value.clone()))
                .collect(),
            expose_tracer_id: settings.expose_tracer_id,
        }
    }

    /// Attach an error logger with the message used for its events.
    pub fn with_error_logger(
        mut self,
        logger: Arc<dyn ErrorLogger>,
        message: impl Into<String>,
    ) -> Self {
        self.logger = Some(logger);
        self.log_error_message = Some(message.into());
        self
    }
}

impl fmt::Debug for ResponderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponderConfig")
            .field("logger", &self.logger.as_ref().map(|_| "<dyn ErrorLogger>"))
            .field("log_error_message", &self.log_error_message)
            .field("log_attrs", &self.log_attrs)
            .field("expose_tracer_id", &self.expose_tracer_id)
            .finish()
    }
}
