// ABOUTME: Paragraph-level container extraction from parsed HTML documents.
// ABOUTME: Pulls trimmed paragraph text from the first container matching a locator, joined with blank lines.

//! Paragraph-level container extraction.
//!
//! Given a parsed document and one [`Locator`], find the first matching
//! container and collect its paragraph text in document order. Direct-text
//! locators additionally take the container's own text chunks ahead of the
//! paragraph list, with exact duplicates removed (first occurrence wins).
//!
//! Key behaviors:
//! - No matching container, or an invalid selector, yields an explicit
//!   absent result; nothing panics and nothing is swallowed.
//! - Each segment is whitespace-normalized; empty segments are dropped.
//! - Segments join with a blank line so paragraph boundaries survive for
//!   downstream readers.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::strategy::{ExtractionMode, Locator};

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("literal selector"));

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the text segments of the first container matching `locator`.
///
/// Returns `None` when the selector is invalid, no container matches, or the
/// matching container holds no usable text. The returned segments are
/// individually trimmed and non-empty; callers filter and join them.
pub fn extract_segments(doc: &Html, locator: &Locator) -> Option<Vec<String>> {
    let selector = Selector::parse(&locator.selector).ok()?;
    let container = doc.select(&selector).next()?;

    let mut segments: Vec<String> = Vec::new();

    if locator.mode == ExtractionMode::DirectText {
        for chunk in container.text() {
            let normalized = normalize_whitespace(chunk);
            if !normalized.is_empty() {
                segments.push(normalized);
            }
        }
    }

    for paragraph in container.select(&PARAGRAPH_SELECTOR) {
        let text = normalize_whitespace(&paragraph.text().collect::<String>());
        if !text.is_empty() {
            segments.push(text);
        }
    }

    if locator.mode == ExtractionMode::DirectText {
        segments = dedupe_preserving_order(segments);
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

/// Extracts and joins the container's text with blank-line separators.
///
/// Convenience over [`extract_segments`] for callers that do not filter.
pub fn extract(doc: &Html, locator: &Locator) -> Option<String> {
    extract_segments(doc, locator).map(|segments| segments.join("\n\n"))
}

/// Removes exact-duplicate segments, keeping the first occurrence of each.
fn dedupe_preserving_order(segments: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    segments
        .into_iter()
        .filter(|segment| seen.insert(segment.clone()))
        .collect()
}
