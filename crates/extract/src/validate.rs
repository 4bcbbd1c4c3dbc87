// ABOUTME: Final content validation gate producing the extraction outcome.
// ABOUTME: Trims, rejects empty text, enforces the strategy minimum length, and normalizes failures to no-content.

//! Content validation.
//!
//! The single point where "did we actually get something usable" is decided.
//! Upstream components may hand back short or empty strings; this gate turns
//! that into the final outcome. Degraded-mode output skips the length check,
//! since derived titles carry their own pass/fail signal.

use crate::outcome::{ExtractionOutcome, ExtractionStatus};
use crate::strategy::CompiledStrategy;

/// Validates raw extracted text against the strategy's acceptance rules.
pub fn validate(raw: &str, strategy: &CompiledStrategy) -> ExtractionOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ExtractionOutcome::failure(ExtractionStatus::EmptyDocument);
    }

    if !strategy.spec().degraded && trimmed.chars().count() < strategy.spec().minimum_length {
        return ExtractionOutcome::failure(ExtractionStatus::BelowMinimumLength);
    }

    ExtractionOutcome::success(trimmed)
}
