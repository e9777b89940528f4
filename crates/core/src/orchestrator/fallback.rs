//! # Extractive Fallback
//!
//! Builds an answer straight from retrieved snippets, with no generation.

use super::answer::Answer;
use crate::wiki::SearchSnippet;

/// Stand-in text for a snippet whose extract came back blank
pub const NO_SUMMARY: &str = "No summary available.";

/// Assemble `"<title>: <extract>"` blocks separated by a blank line.
///
/// Sources are the snippet URLs in the same order. With no snippets this is
/// the not-found sentinel.
pub fn extractive_answer(snippets: &[SearchSnippet]) -> Answer {
    if snippets.is_empty() {
        return Answer::not_found();
    }

    let answer = snippets
        .iter()
        .map(|snippet| {
            let extract = if snippet.extract.trim().is_empty() {
                NO_SUMMARY
            } else {
                snippet.extract.as_str()
            };
            format!("{}: {}", snippet.title, extract)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let sources = snippets.iter().map(|s| s.url.clone()).collect();

    Answer::new(answer, sources)
}
