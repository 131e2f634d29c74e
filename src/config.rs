//! Configuration for the extraction handler.

use serde::{Deserialize, Serialize};

/// Handler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Accept `data:<mime>;base64,<payload>` bodies by decoding only the payload.
    pub accept_data_uri: bool,

    /// Remove ASCII whitespace from the body before decoding.
    pub strip_whitespace: bool,

    /// Echo the event type and body through the invocation logger.
    pub log_event: bool,

    /// Truncate the echoed body to this many characters.
    pub max_logged_body_len: Option<usize>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            accept_data_uri: true,
            strip_whitespace: false,
            log_event: true,
            max_logged_body_len: None,
        }
    }

    /// Accept data URI bodies.
    pub fn with_data_uri(mut self, enable: bool) -> Self {
        self.accept_data_uri = enable;
        self
    }

    /// Strip whitespace before decoding.
    pub fn with_strip_whitespace(mut self, enable: bool) -> Self {
        self.strip_whitespace = enable;
        self
    }

    /// Echo the event through the invocation logger.
    pub fn with_event_logging(mut self, enable: bool) -> Self {
        self.log_event = enable;
        self
    }

    /// Limit how much of the body is echoed.
    pub fn with_max_logged_body_len(mut self, limit: usize) -> Self {
        self.max_logged_body_len = Some(limit);
        self
    }
}
