// ABOUTME: Degraded-mode title derivation from a URL's path slug.
// ABOUTME: Pure function: slug scan, extension and article-ID stripping, token capitalization, fixed prefix.

//! Degraded-mode pseudo-content derivation.
//!
//! Some sources refuse automated retrieval. For those, no document is ever
//! fetched; instead a human-readable title is derived from the request URL's
//! path slug. The result carries a fixed marker prefix so callers can tell
//! synthesized pseudo-content from real body text.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Marker prefixed to every derived title.
pub const DERIVED_TITLE_PREFIX: &str = "Article Title: ";

/// Page-extension marker stripped from slug segments.
const PAGE_EXTENSION: &str = ".html";

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug pattern"));

/// Sites commonly append a numeric article ID after the slug.
static TRAILING_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+$").expect("id pattern"));

/// Derives a pseudo-title from the URL's path slug.
///
/// Scans path segments last-to-first for the first segment that carries the
/// page extension or looks like a slug, strips the extension and any trailing
/// numeric article ID, capitalizes the hyphen-separated tokens, and prefixes
/// the marker. Returns `None` when no segment yields a readable title, e.g.
/// when the only candidate is purely numeric.
///
/// Pure function of the URL string: the same URL always derives the same
/// title.
pub fn derive(url: &str) -> Option<String> {
    let segment = find_slug_segment(url)?;
    let slug = segment.strip_suffix(PAGE_EXTENSION).unwrap_or(&segment);
    let slug = TRAILING_ID_RE.replace(slug, "");

    // An all-digit remainder (a bare article ID) is not a title.
    if !slug.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let title = slug
        .split('-')
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.trim().is_empty() {
        None
    } else {
        Some(format!("{}{}", DERIVED_TITLE_PREFIX, title.trim()))
    }
}

/// Finds the last path segment that is extension-suffixed or slug-shaped.
fn find_slug_segment(url: &str) -> Option<String> {
    let segments: Vec<String> = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .map(|s| s.map(str::to_string).collect())
            .unwrap_or_default(),
        // Not an absolute URL: fall back to splitting the raw path.
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or(url);
            path.split('/').map(str::to_string).collect()
        }
    };

    segments
        .into_iter()
        .rev()
        .find(|seg| !seg.is_empty() && (seg.ends_with(PAGE_EXTENSION) || SLUG_RE.is_match(seg)))
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derives_title_from_slug_with_id_and_extension() {
        let url = "https://www.hindustantimes.com/india-news/articles/pm-modi-inaugurates-metro-101749461946504.html";
        assert_eq!(
            derive(url).as_deref(),
            Some("Article Title: Pm Modi Inaugurates Metro")
        );
    }

    #[test]
    fn derives_from_bare_slug_without_extension() {
        let url = "https://www.hindustantimes.com/cities/delhi-rain-alert-issued";
        assert_eq!(
            derive(url).as_deref(),
            Some("Article Title: Delhi Rain Alert Issued")
        );
    }

    #[test]
    fn purely_numeric_segment_derives_nothing() {
        let url = "https://www.hindustantimes.com/articles/101749461946504";
        assert_eq!(derive(url), None);
    }

    #[test]
    fn purely_numeric_html_segment_derives_nothing() {
        let url = "https://www.hindustantimes.com/articles/101749461946504.html";
        assert_eq!(derive(url), None);
    }

    #[test]
    fn skips_trailing_empty_segment() {
        let url = "https://www.hindustantimes.com/world-news/summit-concludes-today/";
        assert_eq!(
            derive(url).as_deref(),
            Some("Article Title: Summit Concludes Today")
        );
    }

    #[test]
    fn mixed_case_tokens_are_normalized() {
        let url = "https://www.hindustantimes.com/news/ISRO-Launch-UPDATE.html";
        assert_eq!(derive(url).as_deref(), Some("Article Title: Isro Launch Update"));
    }

    #[test]
    fn relative_path_falls_back_to_raw_splitting() {
        assert_eq!(
            derive("/india-news/budget-session-begins-201.html").as_deref(),
            Some("Article Title: Budget Session Begins")
        );
    }

    #[test]
    fn query_string_does_not_leak_into_the_slug() {
        let url = "https://www.hindustantimes.com/india-news/floods-recede-in-assam.html?ref=home";
        assert_eq!(
            derive(url).as_deref(),
            Some("Article Title: Floods Recede In Assam")
        );
    }

    #[test]
    fn empty_path_derives_nothing() {
        assert_eq!(derive("https://www.hindustantimes.com/"), None);
    }

    #[test]
    fn same_url_always_derives_the_same_title() {
        let url = "https://www.hindustantimes.com/sports/final-ends-in-draw-77.html";
        assert_eq!(derive(url), derive(url));
    }
}
