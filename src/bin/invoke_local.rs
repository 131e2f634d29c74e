//! Invoke the handler locally
//!
//! Runs one invocation outside the managed runtime with console logging.
//!
//! Usage:
//!   cargo run --bin invoke_local -- --event event.json
//!   cargo run --bin invoke_local -- --pdf paper.pdf --tagged
//!   cat event.json | cargo run --bin invoke_local -- --quiet

use pdf_text_handler::{DocumentTextExtractionHandler, HandlerConfig, InvocationContext, InvocationEvent};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

enum EventSource {
    EventFile(PathBuf),
    PdfFile(PathBuf),
    Stdin,
}

struct InvokeConfig {
    source: EventSource,
    tagged: bool,
    handler: HandlerConfig,
}

impl InvokeConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut source = EventSource::Stdin;
        let mut tagged = false;
        let mut handler = HandlerConfig::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--event" => {
                    i += 1;
                    if i < args.len() {
                        source = EventSource::EventFile(PathBuf::from(&args[i]));
                    }
                },
                "--pdf" => {
                    i += 1;
                    if i < args.len() {
                        source = EventSource::PdfFile(PathBuf::from(&args[i]));
                    }
                },
                "--max-body-log" => {
                    i += 1;
                    match args.get(i).and_then(|n| n.parse().ok()) {
                        Some(limit) => handler = handler.with_max_logged_body_len(limit),
                        None => eprintln!("Ignoring --max-body-log without a numeric value"),
                    }
                },
                "--tagged" => tagged = true,
                "--quiet" | "-q" => handler = handler.with_event_logging(false),
                "--strip-whitespace" => handler = handler.with_strip_whitespace(true),
                other => eprintln!("Ignoring unknown argument: {}", other),
            }
            i += 1;
        }

        Self {
            source,
            tagged,
            handler,
        }
    }
}

fn load_event(source: &EventSource) -> pdf_text_handler::Result<InvocationEvent> {
    match source {
        EventSource::EventFile(path) => InvocationEvent::from_path(path),
        EventSource::PdfFile(path) => Ok(InvocationEvent::from_document_bytes(&std::fs::read(path)?)),
        EventSource::Stdin => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            InvocationEvent::from_json(&json)
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let config = InvokeConfig::from_args();

    let event = match load_event(&config.source) {
        Ok(event) => event,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let handler = DocumentTextExtractionHandler::new().with_config(config.handler);
    let ctx = InvocationContext::local();
    log::info!("Invoking handler with request id {}", ctx.request_id());

    let result = handler.handle(&event, &ctx);
    if config.tagged {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        println!("{}", result.into_response());
    }

    ExitCode::SUCCESS
}
