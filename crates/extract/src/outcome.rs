// ABOUTME: Request and outcome model for one extraction invocation.
// ABOUTME: ExtractionOutcome constructors enforce that content is present exactly when status is Success.

use serde::Serialize;
use std::fmt;

use crate::source::Source;

/// One extraction request: the article URL plus the source it belongs to.
///
/// Created per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub url: String,
    pub source: Source,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>, source: Source) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

/// Classification of how an extraction attempt ended.
///
/// Every failure collapses to "no content" for the caller; the distinct
/// variants exist so selector drift is diagnosable from logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    Success,
    EmptyDocument,
    AllLocatorsFailed,
    BelowMinimumLength,
    DerivationFailed,
}

impl fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExtractionStatus::Success => "success",
            ExtractionStatus::EmptyDocument => "empty document",
            ExtractionStatus::AllLocatorsFailed => "all locators failed",
            ExtractionStatus::BelowMinimumLength => "below minimum length",
            ExtractionStatus::DerivationFailed => "derivation failed",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of one extraction request.
///
/// Invariant: `content` is `Some` if and only if `status` is
/// [`ExtractionStatus::Success`]. Fields are private and the constructors
/// uphold this; there is no way to build a successful outcome without text or
/// a failed one that carries text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionOutcome {
    content: Option<String>,
    status: ExtractionStatus,
}

impl ExtractionOutcome {
    /// Build a successful outcome carrying the extracted text.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            status: ExtractionStatus::Success,
        }
    }

    /// Build a failed outcome with the given classification.
    ///
    /// `status` must not be `Success`; a success without content is not
    /// representable.
    pub fn failure(status: ExtractionStatus) -> Self {
        debug_assert!(status != ExtractionStatus::Success);
        Self {
            content: None,
            status,
        }
    }

    pub fn status(&self) -> ExtractionStatus {
        self.status
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Consume the outcome, yielding the extracted text on success.
    pub fn into_content(self) -> Option<String> {
        self.content
    }

    pub fn is_success(&self) -> bool {
        self.status == ExtractionStatus::Success
    }
}
