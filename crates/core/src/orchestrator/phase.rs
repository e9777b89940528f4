//! # Answer Phases
//!
//! The orchestrator runs at most two phases, in a fixed order.

use serde::{Deserialize, Serialize};

use super::answer::Answer;

/// Which phase produced the final answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPhase {
    /// Tool-augmented generation
    Primary,
    /// Extractive answer built from a direct search
    Fallback,
}

impl AnswerPhase {
    /// Short label for logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            AnswerPhase::Primary => "generated",
            AnswerPhase::Fallback => "extractive",
        }
    }
}

/// An answer together with the phase that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub answer: Answer,
    pub phase: AnswerPhase,
}
