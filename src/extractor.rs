//! Text extraction engines.
//!
//! The handler never parses documents itself. It hands decoded bytes to a
//! [`TextExtractor`]; the default [`PdfExtractor`] delegates to the
//! `pdf-extract` crate.

use crate::error::{Error, Result};
use std::thread;
use std::time::Instant;

/// Window searched for the `%PDF-` signature. Some writers emit junk before it.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Bytes shown when reporting an unexpected header.
const HEADER_PREVIEW_LEN: usize = 8;

/// Deepest `[` / `<<` nesting accepted outside of streams. The engine parses
/// objects recursively and a stack overflow aborts the process.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Stack for the engine thread. Content streams are parsed recursively too and
/// are not covered by the nesting scan.
const ENGINE_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Text pulled out of a document, one entry per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    /// Page texts in document order
    pub pages: Vec<String>,
}

impl ExtractedText {
    /// Wrap page texts.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages joined by newlines.
    pub fn text(&self) -> String {
        self.pages.join("\n")
    }
}

/// A document-to-text engine.
pub trait TextExtractor {
    /// Extract the text of `bytes`.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        (**self).extract(bytes)
    }
}

impl<T: TextExtractor + ?Sized> TextExtractor for Box<T> {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        (**self).extract(bytes)
    }
}

/// PDF extractor backed by `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        check_pdf_header(bytes)?;
        check_nesting_depth(bytes, MAX_NESTING_DEPTH)?;

        let start = Instant::now();
        // pdf-extract panics on some malformed input instead of returning errors;
        // a panic on the worker surfaces as a join error.
        let outcome = thread::scope(|scope| {
            thread::Builder::new()
                .name("pdf-extract".to_string())
                .stack_size(ENGINE_STACK_SIZE)
                .spawn_scoped(scope, || {
                    pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| e.to_string())
                })
                .map(|handle| handle.join())
        })?;

        let pages = match outcome {
            Ok(Ok(pages)) => pages,
            Ok(Err(reason)) => return Err(Error::Parse(reason)),
            Err(payload) => {
                let reason = panic_message(&*payload);
                log::warn!("pdf-extract panicked: {}", reason);
                return Err(Error::EnginePanic(reason));
            },
        };
        if pages.is_empty() {
            return Err(Error::Parse("document contains no pages".to_string()));
        }

        log::debug!(
            "Extracted {} pages from {} bytes in {:?}",
            pages.len(),
            bytes.len(),
            start.elapsed()
        );

        Ok(ExtractedText::from_pages(
            pages.into_iter().map(|page| page.trim().to_string()).collect(),
        ))
    }
}

/// Verify that `bytes` carries a PDF signature near its start.
pub fn check_pdf_header(bytes: &[u8]) -> Result<()> {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    if window.windows(5).any(|w| w == b"%PDF-") {
        return Ok(());
    }
    Err(Error::InvalidHeader(header_preview(bytes)))
}

/// Reject documents whose array or dictionary nesting exceeds `max_depth`.
///
/// Comments, literal and hex strings, and stream data are skipped so that
/// delimiters inside them are not counted.
pub fn check_nesting_depth(bytes: &[u8], max_depth: usize) -> Result<()> {
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                    i += 1;
                }
            },
            b'(' => i = skip_literal_string(bytes, i),
            b'<' if bytes.get(i + 1) == Some(&b'<') => {
                depth += 1;
                i += 1;
            },
            b'<' => {
                while i < bytes.len() && bytes[i] != b'>' {
                    i += 1;
                }
            },
            b'>' if bytes.get(i + 1) == Some(&b'>') => {
                depth = depth.saturating_sub(1);
                i += 1;
            },
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b's' if is_stream_keyword(bytes, i) => {
                i = skip_stream_data(bytes, i + b"stream".len());
                continue;
            },
            _ => {},
        }
        if depth > max_depth {
            return Err(Error::Parse(format!(
                "object nesting exceeds {} levels at byte {}",
                max_depth, i
            )));
        }
        i += 1;
    }
    Ok(())
}

/// Index of the closing parenthesis of the literal string opening at `start`.
fn skip_literal_string(bytes: &[u8], start: usize) -> usize {
    let mut parens = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' => parens += 1,
            b')' => {
                parens -= 1;
                if parens == 0 {
                    return i;
                }
            },
            _ => {},
        }
        i += 1;
    }
    i
}

fn is_stream_keyword(bytes: &[u8], i: usize) -> bool {
    bytes[i..].starts_with(b"stream")
        && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric())
        && matches!(bytes.get(i + 6), Some(b'\r') | Some(b'\n'))
}

/// Position just past `endstream`, or the end of input.
fn skip_stream_data(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .windows(b"endstream".len())
        .position(|w| w == b"endstream")
        .map(|pos| from + pos + b"endstream".len())
        .unwrap_or(bytes.len())
}

fn header_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(HEADER_PREVIEW_LEN)
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                (b as char).to_string()
            } else {
                format!("\\x{:02x}", b)
            }
        })
        .collect()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
