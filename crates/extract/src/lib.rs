// ABOUTME: Main library entry point for the gpress article body extraction engine.
// ABOUTME: Re-exports the public API: Extractor, DocumentProvider, StrategyRegistry, ExtractionOutcome, ExtractError.

//! gpress-extract - per-source article body extraction from news-site HTML.
//!
//! This crate turns a `(url, source)` pair plus a parsed document supplied by
//! an external browser-automation collaborator into clean article body text.
//! Each source has a declarative strategy: an ordered chain of structural
//! locators with generic fallbacks, boilerplate exclusion, and a minimum
//! acceptable length. Sources that refuse scraping run in degraded mode and
//! derive a pseudo-title from the URL path instead of touching a document.
//!
//! # Example
//!
//! ```
//! use gpress_extract::{ExtractionRequest, Extractor, Html, Source};
//!
//! # fn main() -> Result<(), gpress_extract::ExtractError> {
//! let extractor = Extractor::builder().build();
//! let request = ExtractionRequest::new(
//!     "https://www.thehindu.com/news/national/article-one.ece",
//!     Source::Hindu,
//! );
//! let document = Html::parse_document(
//!     "<html><body><div class=\"articlebodycontent\"><p>Body text.</p></div></body></html>",
//! );
//!
//! let outcome = extractor.extract_document(&request, Some(&document))?;
//! assert_eq!(outcome.content(), Some("Body text."));
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod derive;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod outcome;
pub mod paragraphs;
pub mod source;
pub mod strategy;
pub mod validate;

pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractor::{DocumentProvider, Extractor, ExtractorBuilder};
pub use crate::loader::load_builtin_registry;
pub use crate::outcome::{ExtractionOutcome, ExtractionRequest, ExtractionStatus};
pub use crate::source::{Source, ALL_SOURCES};
pub use crate::strategy::{
    CompiledStrategy, ExtractionMode, Locator, SourceStrategy, StrategyRegistry,
};

// The document type callers hand to the engine.
pub use scraper::Html;
