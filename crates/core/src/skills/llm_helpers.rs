//! # LLM Helpers
//!
//! Provider dispatch for radkit workers. `LlmWorker::builder` is generic
//! over the client type, so each provider needs its own arm; the builder
//! chain lives in [`llm_worker_run!`] and every arm only constructs the
//! client.

/// Build an `LlmWorker` around an already constructed client and run it.
#[doc(hidden)]
#[macro_export]
macro_rules! llm_worker_run {
    ($llm:expr, $output_type:ty, $system_prompt:expr, $input:expr, $($tool:expr),*) => {{
        radkit::agent::LlmWorker::<$output_type>::builder($llm)
            .with_system_instructions($system_prompt)
            $(.with_tool($tool))*
            .build()
            .run($input)
            .await
            .map_err(Into::into)
    }};
}

/// Run an `LlmWorker` producing `$output_type` on the configured provider.
///
/// Only OpenAI honours `base_url`. Missing API keys surface as errors.
#[macro_export]
macro_rules! run_llm_worker {
    ($config:expr, $output_type:ty, $system_prompt:expr, $input:expr, $($tool:expr),* $(,)?) => {{
        use $crate::models::LlmProvider;
        use radkit::models::providers::{
            AnthropicLlm, DeepSeekLlm, GeminiLlm, GrokLlm, OpenAILlm, OpenRouterLlm,
        };

        let config = $config;
        let result: anyhow::Result<$output_type> = match config.provider {
            LlmProvider::Anthropic => $crate::llm_worker_run!(
                AnthropicLlm::from_env(&config.model)?, $output_type, $system_prompt, $input, $($tool),*
            ),
            LlmProvider::OpenAI => {
                let mut llm = OpenAILlm::from_env(&config.model)?;
                if let Some(base_url) = &config.base_url {
                    llm = llm.with_base_url(base_url);
                }
                $crate::llm_worker_run!(llm, $output_type, $system_prompt, $input, $($tool),*)
            }
            LlmProvider::Gemini => $crate::llm_worker_run!(
                GeminiLlm::from_env(&config.model)?, $output_type, $system_prompt, $input, $($tool),*
            ),
            LlmProvider::OpenRouter => $crate::llm_worker_run!(
                OpenRouterLlm::from_env(&config.model)?, $output_type, $system_prompt, $input, $($tool),*
            ),
            LlmProvider::Grok => $crate::llm_worker_run!(
                GrokLlm::from_env(&config.model)?, $output_type, $system_prompt, $input, $($tool),*
            ),
            LlmProvider::DeepSeek => $crate::llm_worker_run!(
                DeepSeekLlm::from_env(&config.model)?, $output_type, $system_prompt, $input, $($tool),*
            ),
        };
        result
    }};
}

pub use run_llm_worker;
