// ABOUTME: Fallback chain executor driving a strategy's ordered locator lists.
// ABOUTME: Applies per-paragraph exclusion filtering and the minimum-length gate, short-circuiting on first success.

//! Ordered fallback chain execution.
//!
//! Walks a strategy's primary locators, then its generic document-level
//! fallbacks, in declared order. A locator is accepted when its filtered,
//! joined text meets the strategy's minimum length; the first acceptable
//! result wins and later locators are never evaluated. Insufficient length is
//! treated the same as no match so a captured nav link never masquerades as
//! an article.
//!
//! Exclusion phrases are applied per paragraph before the length gate: one
//! boilerplate line never discards an otherwise-good article.

use scraper::Html;
use tracing::{debug, warn};

use crate::paragraphs;
use crate::strategy::{CompiledStrategy, Locator};

/// Why a chain run produced no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFailure {
    /// No locator yielded any non-excluded text.
    NoMatch,
    /// At least one locator yielded text, but none met the minimum length.
    BelowMinimum,
}

/// Runs the strategy's locator chain against a parsed document.
///
/// Returns the first acceptable joined text, or a [`ChainFailure`]
/// classifying why nothing was usable.
pub fn run(doc: &Html, strategy: &CompiledStrategy) -> Result<String, ChainFailure> {
    let mut saw_short = false;

    if let Some(text) = attempt(doc, strategy, &strategy.spec().primary_locators, &mut saw_short) {
        return Ok(text);
    }

    if !strategy.spec().generic_fallback_locators.is_empty() {
        warn!(
            source = %strategy.source(),
            "primary locators exhausted, trying generic fallbacks"
        );
        if let Some(text) = attempt(
            doc,
            strategy,
            &strategy.spec().generic_fallback_locators,
            &mut saw_short,
        ) {
            return Ok(text);
        }
    }

    Err(if saw_short {
        ChainFailure::BelowMinimum
    } else {
        ChainFailure::NoMatch
    })
}

/// Tries each locator in order, returning the first result that survives
/// exclusion filtering and the length gate.
fn attempt(
    doc: &Html,
    strategy: &CompiledStrategy,
    locators: &[Locator],
    saw_short: &mut bool,
) -> Option<String> {
    let minimum = strategy.spec().minimum_length;

    for locator in locators {
        let Some(segments) = paragraphs::extract_segments(doc, locator) else {
            debug!(selector = %locator.selector, "locator matched no container");
            continue;
        };

        let kept: Vec<String> = segments
            .into_iter()
            .filter(|segment| !strategy.is_excluded(segment))
            .collect();
        if kept.is_empty() {
            debug!(selector = %locator.selector, "every paragraph was excluded");
            continue;
        }

        let joined = kept.join("\n\n");
        let length = joined.chars().count();
        if length >= minimum {
            debug!(selector = %locator.selector, length, "locator accepted");
            return Some(joined);
        }

        debug!(
            selector = %locator.selector,
            length,
            minimum,
            "extracted text below minimum length"
        );
        *saw_short = true;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use crate::strategy::SourceStrategy;
    use pretty_assertions::assert_eq;

    fn strategy(
        primary: Vec<Locator>,
        generic: Vec<Locator>,
        exclusions: Vec<&str>,
        minimum_length: usize,
    ) -> CompiledStrategy {
        CompiledStrategy::compile(SourceStrategy {
            source: Source::Hindu,
            primary_locators: primary,
            generic_fallback_locators: generic,
            exclusion_phrases: exclusions.into_iter().map(String::from).collect(),
            minimum_length,
            degraded: false,
        })
    }

    #[test]
    fn first_primary_locator_wins_unmodified() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="first"><p>From the first locator.</p></div>
                <div class="second"><p>From the second locator.</p></div>
            </body></html>"#,
        );
        let strategy = strategy(
            vec![Locator::css("div.first"), Locator::css("div.second")],
            vec![],
            vec![],
            1,
        );

        let result = run(&doc, &strategy).expect("first locator should be accepted");
        assert_eq!(result, "From the first locator.");
    }

    #[test]
    fn short_primary_falls_through_to_generic() {
        // 30-odd characters of real text against a 50-character gate: the
        // primary result is a failure, not a truncated success.
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="teaser"><p>Thirty characters of text here</p></div>
                <article><p>A generic fallback paragraph long enough to clear the gate comfortably.</p></article>
            </body></html>"#,
        );
        let strategy = strategy(
            vec![Locator::css("div.teaser")],
            vec![Locator::css("article")],
            vec![],
            50,
        );

        let result = run(&doc, &strategy).expect("generic fallback should be accepted");
        assert!(result.starts_with("A generic fallback paragraph"));
    }

    #[test]
    fn exclusion_drops_single_paragraph_not_the_article() {
        let doc = Html::parse_document(
            r#"<html><body><div class="body">
                <p>The opening paragraph carries the substance of the report.</p>
                <p>Also Read: ten other stories you missed</p>
                <p>The closing paragraph wraps up the coverage in detail.</p>
            </div></body></html>"#,
        );
        let strategy = strategy(vec![Locator::css("div.body")], vec![], vec!["Also Read"], 50);

        let result = run(&doc, &strategy).expect("filtered article should pass");
        assert_eq!(
            result,
            "The opening paragraph carries the substance of the report.\n\nThe closing paragraph wraps up the coverage in detail."
        );
    }

    #[test]
    fn nothing_matches_classifies_as_no_match() {
        let doc = Html::parse_document(r#"<html><body><p>stray</p></body></html>"#);
        let strategy = strategy(
            vec![Locator::css("div.absent")],
            vec![Locator::css("div.also-absent")],
            vec![],
            1,
        );

        assert_eq!(run(&doc, &strategy), Err(ChainFailure::NoMatch));
    }

    #[test]
    fn short_everywhere_classifies_as_below_minimum() {
        let doc = Html::parse_document(
            r#"<html><body><div class="body"><p>too short</p></div></body></html>"#,
        );
        let strategy = strategy(vec![Locator::css("div.body")], vec![], vec![], 200);

        assert_eq!(run(&doc, &strategy), Err(ChainFailure::BelowMinimum));
    }

    #[test]
    fn fully_excluded_container_is_a_plain_miss() {
        let doc = Html::parse_document(
            r#"<html><body><div class="body"><p>Also Read: everything here is boilerplate</p></div></body></html>"#,
        );
        let strategy = strategy(vec![Locator::css("div.body")], vec![], vec!["Also Read"], 1);

        assert_eq!(run(&doc, &strategy), Err(ChainFailure::NoMatch));
    }

    #[test]
    fn generic_fallbacks_only_after_all_primaries() {
        // Both a later primary and a generic fallback match; the primary wins.
        let doc = Html::parse_document(
            r#"<html><body>
                <article><p>Generic article body.</p></article>
                <div class="specific"><p>Source-specific body.</p></div>
            </body></html>"#,
        );
        let strategy = strategy(
            vec![Locator::css("div.missing"), Locator::css("div.specific")],
            vec![Locator::css("article")],
            vec![],
            1,
        );

        let result = run(&doc, &strategy).expect("primary should win");
        assert_eq!(result, "Source-specific body.");
    }
}
