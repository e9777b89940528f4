//! Prompt templates bundled at compile time.
//!
//! The template is process-wide and never mutated at runtime.

/// WikiAgent - answers questions from Wikipedia with cited sources
pub const WIKI_AGENT: &str = include_str!("defaults/wiki_agent.md");

/// Build the generation input for a question
pub fn render_question(question: &str) -> String {
    format!("Question: {}", question)
}
