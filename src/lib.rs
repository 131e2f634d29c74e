//! # PDF Text Handler
//!
//! Serverless function handler that turns a base64-encoded PDF carried in an
//! invocation event into plain text.
//!
//! ## Flow
//!
//! 1. Read the event's `body` field (data URIs are accepted).
//! 2. Decode it from base64.
//! 3. Hand the bytes to a [`TextExtractor`] (by default [`PdfExtractor`],
//!    backed by the `pdf-extract` crate).
//! 4. Return an [`ExtractionResult`], or collapse it into the legacy string
//!    response with [`DocumentTextExtractionHandler::handle_request`].
//!
//! The handler never fails: decoding and parsing errors are logged through
//! the invocation's [`InvocationLogger`] and returned as values.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_text_handler::{DocumentTextExtractionHandler, InvocationContext, InvocationEvent};
//!
//! let handler = DocumentTextExtractionHandler::new();
//! let event = InvocationEvent::from_document_bytes(&std::fs::read("paper.pdf")?);
//! let text = handler.handle_request(&event, &InvocationContext::local());
//! println!("{}", text);
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Invocation inputs
pub mod context;
pub mod event;
pub mod logging;

// Decoding and extraction
pub mod decode;
pub mod extractor;

// Handler and its outcomes
pub mod handler;
pub mod result;

pub use config::HandlerConfig;
pub use context::InvocationContext;
pub use error::{Error, FailureKind, Result};
pub use event::InvocationEvent;
pub use extractor::{ExtractedText, PdfExtractor, TextExtractor};
pub use handler::DocumentTextExtractionHandler;
pub use logging::{ConsoleLogger, InvocationLogger, MemoryLogger, RecordLogger};
pub use result::ExtractionResult;
