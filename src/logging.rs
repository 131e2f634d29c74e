//! Invocation logging sinks.
//!
//! The hosting runtime hands every invocation a logger. Handlers only see the
//! [`InvocationLogger`] trait, so local runs can print to the console and tests
//! can capture lines in memory.

use std::sync::{Mutex, PoisonError};

/// Log target used by [`RecordLogger`].
pub const INVOCATION_TARGET: &str = "pdf_text_handler::invocation";

/// A sink for invocation diagnostics.
pub trait InvocationLogger: Send + Sync {
    /// Log a text message.
    fn log(&self, message: &str);

    /// Log a raw message; invalid UTF-8 is replaced.
    fn log_bytes(&self, message: &[u8]) {
        self.log(&String::from_utf8_lossy(message));
    }
}

/// Writes every message to standard output, one line each.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    /// Create a console logger.
    pub fn new() -> Self {
        Self
    }
}

impl InvocationLogger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}", message);
    }
}

/// Forwards messages to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordLogger;

impl InvocationLogger for RecordLogger {
    fn log(&self, message: &str) {
        log::info!(target: INVOCATION_TARGET, "{}", message);
    }
}

/// Keeps messages in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// True if any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|line| line.contains(needle))
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl InvocationLogger for MemoryLogger {
    fn log(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_in_order() {
        let logger = MemoryLogger::new();
        logger.log("first");
        logger.log("second");
        assert_eq!(logger.lines(), vec!["first", "second"]);
        assert!(logger.contains("sec"));
        logger.clear();
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_log_bytes_is_lossy() {
        let logger = MemoryLogger::new();
        logger.log_bytes(b"caf\xc3\xa9");
        logger.log_bytes(&[b'o', b'k', 0xFF]);
        assert_eq!(logger.lines()[0], "caf\u{e9}");
        assert_eq!(logger.lines()[1], "ok\u{fffd}");
    }

    #[test]
    fn test_console_and_record_loggers_accept_both_forms() {
        ConsoleLogger::new().log("console line");
        ConsoleLogger::new().log_bytes(b"console bytes");
        RecordLogger.log("record line");
        RecordLogger.log_bytes(b"record bytes");
    }

    #[test]
    fn test_loggers_are_object_safe() {
        let memory = MemoryLogger::new();
        let loggers: [&dyn InvocationLogger; 3] = [&ConsoleLogger, &RecordLogger, &memory];
        for logger in loggers {
            logger.log("shared");
        }
        assert_eq!(memory.lines(), vec!["shared"]);
    }
}
