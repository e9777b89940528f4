//! # Answer Generators
//!
//! The generation phase as an injected capability. The orchestrator only
//! sees `generate(question) -> answer | nothing | failure`; how the model is
//! prompted and when it calls the search tool stays behind this trait.

use async_trait::async_trait;

use super::answer::{Answer, Question};
use crate::models::ModelConfig;
use crate::run_llm_worker;
use crate::skills::prompts;
use crate::skills::tools::search_tools;

/// Produces a structured answer for a question, or nothing
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// `Ok(None)` means the generator ran but produced no output.
    async fn generate(&self, question: &Question) -> anyhow::Result<Option<Answer>>;
}

/// Tool-augmented LLM generation through radkit.
///
/// The worker gets the WikiAgent instructions, the `wikipedia_search` tool,
/// and [`Answer`] as its required output shape.
pub struct LlmAnswerGenerator {
    config: ModelConfig,
}

impl LlmAnswerGenerator {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}

#[async_trait]
impl AnswerGenerator for LlmAnswerGenerator {
    async fn generate(&self, question: &Question) -> anyhow::Result<Option<Answer>> {
        let input = prompts::render_question(question.as_str());
        let answer = run_llm_worker!(
            &self.config,
            Answer,
            prompts::WIKI_AGENT,
            input,
            search_tools::wikipedia_search,
        )?;
        Ok(Some(answer))
    }
}

/// Generator that never produces output, forcing the extractive path
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGenerator;

#[async_trait]
impl AnswerGenerator for DisabledGenerator {
    async fn generate(&self, _question: &Question) -> anyhow::Result<Option<Answer>> {
        Ok(None)
    }
}
