//! # Answer Orchestrator
//!
//! Question in, grounded answer out.
//!
//! ## Architecture
//!
//! ```text
//! AnswerOrchestrator
//!   ├── Primary:  AnswerGenerator ──(wikipedia_search tool)*──> Answer
//!   └── Fallback: SnippetSource ──> extractive_answer ──> Answer
//! ```

pub mod answer;
pub mod coordinator;
pub mod fallback;
pub mod generator;
pub mod phase;

pub use answer::{Answer, Question, NOT_FOUND_ANSWER};
pub use coordinator::{AnswerOrchestrator, DEFAULT_GENERATION_TIMEOUT};
pub use fallback::{extractive_answer, NO_SUMMARY};
pub use generator::{AnswerGenerator, DisabledGenerator, LlmAnswerGenerator};
pub use phase::{AnswerOutcome, AnswerPhase};
