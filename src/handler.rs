//! The document text extraction handler.
//!
//! One invocation runs: event body → base64 decode → extractor → text. Every
//! error on the way is logged and turned into an [`ExtractionResult::Failure`];
//! nothing is raised to the caller.

use crate::config::HandlerConfig;
use crate::context::InvocationContext;
use crate::decode::decode_body;
use crate::error::Result;
use crate::event::InvocationEvent;
use crate::extractor::{ExtractedText, PdfExtractor, TextExtractor};
use crate::result::ExtractionResult;

/// Handler turning base64 document events into text.
#[derive(Debug, Clone, Default)]
pub struct DocumentTextExtractionHandler<E = PdfExtractor> {
    extractor: E,
    config: HandlerConfig,
}

impl DocumentTextExtractionHandler<PdfExtractor> {
    /// Handler using the PDF extractor and default configuration.
    pub fn new() -> Self {
        Self::with_extractor(PdfExtractor::new())
    }
}

impl<E: TextExtractor> DocumentTextExtractionHandler<E> {
    /// Handler using a custom extractor.
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            config: HandlerConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: HandlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Handle one invocation, returning a tagged result.
    pub fn handle(&self, event: &InvocationEvent, ctx: &InvocationContext) -> ExtractionResult {
        if self.config.log_event {
            self.log_event(event, ctx);
        }

        match self.extract(event) {
            Ok(extracted) => {
                log::debug!(
                    "[{}] extracted {} pages",
                    ctx.request_id(),
                    extracted.page_count()
                );
                ExtractionResult::success(&extracted)
            },
            Err(e) => {
                ctx.logger().log("Something went wrong.");
                ctx.logger().log(&format!("Extraction failed: {}", e));
                ExtractionResult::failure(&e)
            },
        }
    }

    /// Handle one invocation, returning the legacy single-string response:
    /// the extracted text, or the error description on failure.
    pub fn handle_request(&self, event: &InvocationEvent, ctx: &InvocationContext) -> String {
        self.handle(event, ctx).into_response()
    }

    fn extract(&self, event: &InvocationEvent) -> Result<ExtractedText> {
        let body = event.body_text()?;
        let bytes = decode_body(&body, &self.config)?;
        self.extractor.extract(&bytes)
    }

    fn log_event(&self, event: &InvocationEvent, ctx: &InvocationContext) {
        let logger = ctx.logger();
        logger.log(&format!("EVENT TYPE: {}", event.type_description()));
        if let Ok(body) = event.body_text() {
            logger.log(&format!("EVENT BODY: {}", self.truncate_for_log(&body)));
        }
        logger.log(&format!("EVENT BODY TYPE: {}", event.body_type_name()));
    }

    fn truncate_for_log<'a>(&self, body: &'a str) -> std::borrow::Cow<'a, str> {
        let Some(limit) = self.config.max_logged_body_len else {
            return body.into();
        };
        let total = body.chars().count();
        if total <= limit {
            return body.into();
        }
        let kept: String = body.chars().take(limit).collect();
        format!("{}... ({} chars total)", kept, total).into()
    }
}
