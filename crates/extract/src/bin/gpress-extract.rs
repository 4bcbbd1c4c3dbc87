// ABOUTME: CLI boundary binary for the gpress article body extraction engine.
// ABOUTME: Reads collaborator-captured HTML, runs the extractor, and emits a JSON envelope on stdout/stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use gpress_extract::{
    DocumentProvider, ExtractError, ExtractionRequest, Extractor, Html, Source,
};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "gpress-extract")]
#[command(about = "Extract article body text for a configured news source")]
struct Args {
    /// Article URL
    url: String,

    /// Source key: hindu, hindustan-times, toi, ie, dna
    source: String,

    /// HTML document captured by the browser collaborator ("-" for stdin).
    /// Degraded sources need no document and never read this.
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Pretty-print the JSON envelope
    #[arg(long)]
    pretty: bool,
}

/// Document provider over a captured HTML file or stdin.
///
/// Reading is deferred until the engine asks, so degraded sources never
/// touch the input at all.
struct CapturedDocument {
    path: Option<PathBuf>,
}

impl DocumentProvider for CapturedDocument {
    fn fetch_document(&self, url: &str) -> Result<Option<Html>, ExtractError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let raw = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
                .map_err(|e| ExtractError::fetch(url, "ReadDocument", Some(e.into())))?
        } else {
            fs::read_to_string(path)
                .map_err(|e| ExtractError::fetch(url, "ReadDocument", Some(e.into())))?
        };

        Ok(Some(Html::parse_document(&raw)))
    }
}

fn emit(value: &serde_json::Value, pretty: bool, to_stderr: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(value).unwrap()
    } else {
        serde_json::to_string(value).unwrap()
    };
    if to_stderr {
        eprintln!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
}

fn fail(message: &str, pretty: bool) -> ExitCode {
    emit(&json!({ "error": message }), pretty, true);
    ExitCode::from(1)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let source = match Source::from_str(&args.source) {
        Ok(source) => source,
        Err(err) => return fail(&err.to_string(), args.pretty),
    };

    let extractor = Extractor::builder().build();
    let request = ExtractionRequest::new(&args.url, source);
    let provider = CapturedDocument { path: args.html };

    match extractor.extract_with(&request, &provider) {
        Ok(outcome) => {
            let status = outcome.status();
            match outcome.into_content() {
                Some(content) => {
                    emit(&json!({ "content": content }), args.pretty, false);
                    ExitCode::SUCCESS
                }
                None => {
                    emit(
                        &json!({
                            "error": "Failed to extract article content or content was empty.",
                            "status": status,
                        }),
                        args.pretty,
                        true,
                    );
                    ExitCode::from(1)
                }
            }
        }
        Err(err) => fail(&err.to_string(), args.pretty),
    }
}
