//! Error types for the extraction handler.
//!
//! This module defines every error that can occur while turning an invocation
//! event into extracted text. Inside the handler these never escape: they are
//! folded into a [`crate::ExtractionResult::Failure`].

use serde::{Deserialize, Serialize};

/// Result type alias for handler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during an invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The event has no `body` key
    #[error("Invalid event: missing 'body' field")]
    MissingBody,

    /// The body is not valid base64
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes do not start with a PDF signature
    #[error("Invalid PDF header: expected '%PDF-', found '{0}'")]
    InvalidHeader(String),

    /// The extraction engine rejected the document
    #[error("PDF parsing error: {0}")]
    Parse(String),

    /// The extraction engine panicked on the document
    #[error("PDF parsing error: extraction engine aborted ({0})")]
    EnginePanic(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Event JSON could not be read
    #[error("Invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error into the coarse kind reported to callers.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::MissingBody => FailureKind::MissingBody,
            Error::Base64(_) | Error::Json(_) => FailureKind::Decode,
            Error::InvalidHeader(_) | Error::Parse(_) | Error::EnginePanic(_) | Error::Io(_) => {
                FailureKind::Parse
            },
        }
    }
}

/// Coarse failure category carried by a failed [`crate::ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The event did not carry a body
    MissingBody,
    /// The body could not be decoded into bytes
    Decode,
    /// The bytes could not be parsed as a document
    Parse,
}
