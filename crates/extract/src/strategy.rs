// ABOUTME: Per-source extraction strategy data model and registry.
// ABOUTME: Strategies are declarative configuration; the registry compiles exclusion phrases once at registration.

//! Source strategy definitions.
//!
//! A [`SourceStrategy`] is pure data: an ordered list of locators to try, the
//! exclusion phrases that mark boilerplate paragraphs, a minimum acceptable
//! length, and a degraded flag for sources that cannot be scraped. The
//! executor never branches on source identity; adding a source means adding a
//! registry entry.
//!
//! Key behaviors:
//! - Locator lists are evaluated in declared order; order is load-bearing.
//! - Exclusion phrases are matched case-sensitively, per paragraph.
//! - Registration compiles the phrase set into an Aho-Corasick automaton so
//!   filtering is a single scan per paragraph.

use std::collections::HashMap;

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::source::Source;

/// How text is pulled out of a matched container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Collect the container's paragraph children.
    #[default]
    Paragraphs,
    /// Also take the container's own text, merged ahead of the paragraph
    /// list with exact duplicates removed.
    DirectText,
}

/// A structural address into a parsed document: a CSS selector plus the
/// extraction mode to apply to the first matching container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub selector: String,
    #[serde(default)]
    pub mode: ExtractionMode,
}

impl Locator {
    /// A paragraph-mode locator for the given selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            mode: ExtractionMode::Paragraphs,
        }
    }

    /// A direct-text-mode locator for the given selector.
    pub fn direct_text(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            mode: ExtractionMode::DirectText,
        }
    }
}

fn default_minimum_length() -> usize {
    1
}

/// The complete extraction policy for one source.
///
/// Selector strings are configuration to be validated against live markup,
/// not code contracts; the builtin set lives in `data/strategies.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceStrategy {
    /// The source this strategy belongs to.
    pub source: Source,
    /// Source-specific locators, best-targeted first.
    #[serde(default)]
    pub primary_locators: Vec<Locator>,
    /// Document-level heuristics tried only after every primary locator fails.
    #[serde(default)]
    pub generic_fallback_locators: Vec<Locator>,
    /// Substrings marking a paragraph as boilerplate (case-sensitive).
    #[serde(default)]
    pub exclusion_phrases: Vec<String>,
    /// Threshold below which extracted text counts as a failure.
    #[serde(default = "default_minimum_length")]
    pub minimum_length: usize,
    /// Degraded sources never attempt document-based locators; pseudo-content
    /// is derived from the request URL instead.
    #[serde(default)]
    pub degraded: bool,
}

/// A strategy plus its compiled exclusion matcher.
#[derive(Debug)]
pub struct CompiledStrategy {
    spec: SourceStrategy,
    exclusions: Option<AhoCorasick>,
}

impl CompiledStrategy {
    /// Compile a strategy's exclusion phrases for repeated matching.
    pub fn compile(spec: SourceStrategy) -> Self {
        let exclusions = if spec.exclusion_phrases.is_empty() {
            None
        } else {
            AhoCorasick::new(&spec.exclusion_phrases).ok()
        };
        Self { spec, exclusions }
    }

    pub fn spec(&self) -> &SourceStrategy {
        &self.spec
    }

    pub fn source(&self) -> Source {
        self.spec.source
    }

    /// True if the paragraph contains any exclusion phrase as a substring.
    pub fn is_excluded(&self, paragraph: &str) -> bool {
        match &self.exclusions {
            Some(ac) => ac.is_match(paragraph),
            None => self
                .spec
                .exclusion_phrases
                .iter()
                .any(|phrase| paragraph.contains(phrase)),
        }
    }
}

/// Registry mapping each source to its extraction strategy.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    map: HashMap<Source, CompiledStrategy>,
}

impl StrategyRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a strategy under its source, replacing any earlier entry.
    pub fn register(&mut self, strategy: SourceStrategy) {
        self.map
            .insert(strategy.source, CompiledStrategy::compile(strategy));
    }

    /// Looks up the strategy for a source, failing with UnknownSource when
    /// no entry is registered.
    pub fn resolve(&self, source: Source) -> Result<&CompiledStrategy, ExtractError> {
        self.map
            .get(&source)
            .ok_or_else(|| ExtractError::unknown_source(source.as_str(), "Resolve"))
    }

    /// Looks up the strategy for a source.
    pub fn get(&self, source: Source) -> Option<&CompiledStrategy> {
        self.map.get(&source)
    }

    /// Returns the number of registered strategies.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
