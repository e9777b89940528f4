//! # Snippets
//!
//! The record every retrieval path produces, plus the URL and truncation
//! helpers that keep it deterministic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single retrieved encyclopedia excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchSnippet {
    /// Exact page title as returned by the search
    pub title: String,
    /// Plain-text extract, truncated to the configured budget (may be empty)
    pub extract: String,
    /// Canonical page URL derived from the title
    pub url: String,
}

/// Build the canonical page URL for `title` under `base`.
///
/// Spaces become underscores and the result is percent-encoded, so the
/// same title always maps to the same URL.
pub fn page_url(base: &str, title: &str) -> String {
    let slug = title.replace(' ', "_");
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        urlencoding::encode(&slug)
    )
}

/// Keep at most `budget` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
