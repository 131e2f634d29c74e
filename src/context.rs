//! Per-invocation context supplied by the hosting runtime.

use crate::logging::{ConsoleLogger, InvocationLogger};
use std::fmt;
use std::sync::Arc;

/// Request metadata and the logging capability for one invocation.
#[derive(Clone)]
pub struct InvocationContext {
    request_id: String,
    logger: Arc<dyn InvocationLogger>,
}

impl InvocationContext {
    /// Create a context for `request_id` logging through `logger`.
    pub fn new(request_id: impl Into<String>, logger: Arc<dyn InvocationLogger>) -> Self {
        Self {
            request_id: request_id.into(),
            logger,
        }
    }

    /// Context for running outside the managed runtime: console logging and a
    /// fresh random request id.
    pub fn local() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), Arc::new(ConsoleLogger::new()))
    }

    /// Request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Logger for this invocation.
    pub fn logger(&self) -> &dyn InvocationLogger {
        self.logger.as_ref()
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}
