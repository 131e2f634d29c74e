//! Invocation outcomes.

use crate::error::{Error, FailureKind};
use crate::extractor::ExtractedText;
use serde::{Deserialize, Serialize};

/// Outcome of one invocation.
///
/// The legacy response collapses both variants into a single string; use
/// [`ExtractionResult::into_response`] when that wire format is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionResult {
    /// Text was extracted.
    Success {
        /// Extracted text, pages joined by newlines
        text: String,
        /// Number of pages in the document
        page_count: usize,
    },
    /// Extraction failed.
    Failure {
        /// Failure category
        kind: FailureKind,
        /// Human-readable error description
        message: String,
    },
}

impl ExtractionResult {
    /// Successful result from extracted pages.
    pub fn success(extracted: &ExtractedText) -> Self {
        ExtractionResult::Success {
            text: extracted.text(),
            page_count: extracted.page_count(),
        }
    }

    /// Failed result describing `error`.
    pub fn failure(error: &Error) -> Self {
        ExtractionResult::Failure {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// True for [`ExtractionResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }

    /// Failure category, if any.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { kind, .. } => Some(*kind),
        }
    }

    /// Response body text: the extracted text or the error description.
    pub fn as_response(&self) -> &str {
        match self {
            ExtractionResult::Success { text: body, .. } | ExtractionResult::Failure { message: body, .. } => {
                body
            },
        }
    }

    /// Collapse into the legacy single-string response without copying.
    pub fn into_response(self) -> String {
        match self {
            ExtractionResult::Success { text: body, .. } | ExtractionResult::Failure { message: body, .. } => {
                body
            },
        }
    }
}
