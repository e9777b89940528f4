//! # Questions and Answers
//!
//! The values entering and leaving the orchestrator.

use std::fmt;

use radkit::macros::LLMOutput;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::QuestionError;

/// Answer text used when no evidence was found anywhere
pub const NOT_FOUND_ANSWER: &str = "I could not find enough Wikipedia data to answer.";

/// A non-empty, trimmed question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Question(String);

impl Question {
    /// Trim `text` and reject it if nothing is left
    pub fn new(text: impl AsRef<str>) -> Result<Self, QuestionError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QuestionError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A grounded answer with the Wikipedia pages it was drawn from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, LLMOutput)]
pub struct Answer {
    /// Concise factual answer
    pub answer: String,
    /// Wikipedia page URLs actually consulted, in order of use
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Answer {
    pub fn new(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            sources,
        }
    }

    /// The fixed answer returned when nothing could be retrieved
    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_ANSWER, Vec::new())
    }
}
