// ABOUTME: Error types for the extraction engine including ErrorCode enum and ExtractError struct.
// ABOUTME: Provides categorized hard errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the hard failure categories.
///
/// Soft extraction failures (no locator matched, text too short, ...) are not
/// errors; they are carried on [`crate::ExtractionOutcome`] as a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownSource,
    Fetch,
    Session,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnknownSource => "unknown source",
            ErrorCode::Fetch => "fetch error",
            ErrorCode::Session => "session error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for extraction operations.
///
/// `target` is the URL or source key the operation was acting on.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub target: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gpress-extract: {} {}: {}", self.op, self.target, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    /// Create an UnknownSource error.
    pub fn unknown_source(target: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::UnknownSource,
            target: target.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a Fetch error.
    pub fn fetch(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Fetch,
            target: target.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Session error.
    pub fn session(
        target: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Session,
            target: target.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is an UnknownSource error.
    pub fn is_unknown_source(&self) -> bool {
        self.code == ErrorCode::UnknownSource
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Session error.
    pub fn is_session(&self) -> bool {
        self.code == ErrorCode::Session
    }
}
