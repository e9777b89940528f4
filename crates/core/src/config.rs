//! # Agent Configuration
//!
//! Built once at process start and never mutated afterwards. Values come
//! from `.wikiagent/config.json` when present, then environment overrides.
//!
//! | Variable                 | Effect                                  |
//! |--------------------------|-----------------------------------------|
//! | `WIKIAGENT_PROVIDER`     | LLM provider id (`anthropic`, `openai`) |
//! | `WIKIAGENT_MODEL`        | Model name                              |
//! | `WIKIAGENT_BASE_URL`     | OpenAI-compatible base URL              |
//! | `WIKIAGENT_GENERATION`   | `off` forces extractive answers         |
//! | `WIKIPEDIA_API_URL`      | MediaWiki action API endpoint           |
//! | `WIKIPEDIA_PAGE_URL`     | Prefix for citation URLs                |
//! | `WIKIPEDIA_TIMEOUT_SECS` | Per-request timeout                     |

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{LlmProvider, ModelConfig};
use crate::orchestrator::{
    AnswerGenerator, AnswerOrchestrator, DisabledGenerator, LlmAnswerGenerator,
    DEFAULT_GENERATION_TIMEOUT,
};
use crate::skills::tools::search_tools;
use crate::wiki::{WikiConfig, WikipediaClient};

/// Default location of the config file, relative to the working directory
pub const CONFIG_PATH: &str = ".wikiagent/config.json";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model used for the generation phase
    pub model: ModelConfig,
    /// Wikipedia endpoints and limits
    pub wiki: WikiConfig,
    /// Upper bound on one generation attempt
    pub generation_timeout_secs: u64,
    /// When false, every question is answered extractively
    pub generation_enabled: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            wiki: WikiConfig::default(),
            generation_timeout_secs: DEFAULT_GENERATION_TIMEOUT.as_secs(),
            generation_enabled: true,
        }
    }
}

impl AgentConfig {
    /// Load from [`CONFIG_PATH`] and apply process environment overrides
    pub async fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
            .await
            .with_overrides(|key| std::env::var(key).ok())
    }

    /// Load from `path`. A missing file gives defaults; a malformed one is
    /// logged and also gives defaults. Sections left out of the file keep
    /// their defaults, and a blank model name becomes the provider default.
    pub async fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match tokio::fs::read_to_string(path).await {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(mut config) => {
                    config.model = config.model.or_default_model();
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read config file");
                Self::default()
            }
        }
    }

    /// Apply overrides from `lookup` (normally the process environment)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("WIKIAGENT_PROVIDER") {
            match LlmProvider::parse(&raw) {
                Some(provider) if provider != self.model.provider => {
                    self.model.provider = provider;
                    self.model.model = provider.default_model().to_string();
                }
                Some(_) => {}
                None => tracing::warn!(provider = %raw, "Unknown provider, keeping {}", self.model.provider.id()),
            }
        }
        if let Some(model) = lookup("WIKIAGENT_MODEL") {
            self.model.model = model;
        }
        if let Some(base_url) = lookup("WIKIAGENT_BASE_URL") {
            self.model.base_url = Some(base_url);
        }
        if let Some(flag) = lookup("WIKIAGENT_GENERATION") {
            self.generation_enabled = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "off" | "false" | "0" | "no"
            );
        }
        if let Some(api_url) = lookup("WIKIPEDIA_API_URL") {
            self.wiki.api_url = api_url;
        }
        if let Some(page_url) = lookup("WIKIPEDIA_PAGE_URL") {
            self.wiki.page_base_url = page_url;
        }
        if let Some(raw) = lookup("WIKIPEDIA_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.wiki.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "Invalid WIKIPEDIA_TIMEOUT_SECS, keeping {}", self.wiki.timeout_secs),
            }
        }
        self
    }

    /// Generation bound; zero is not a usable timeout and means the default.
    pub fn generation_timeout(&self) -> Duration {
        if self.generation_timeout_secs == 0 {
            tracing::warn!(
                "generation_timeout_secs is 0, using {}s",
                DEFAULT_GENERATION_TIMEOUT.as_secs()
            );
            return DEFAULT_GENERATION_TIMEOUT;
        }
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Wire the Wikipedia client, search tool, and generator together.
    pub fn build_orchestrator(&self) -> Result<AnswerOrchestrator> {
        let client =
            WikipediaClient::new(self.wiki.clone()).context("Failed to build Wikipedia client")?;

        if !search_tools::install_client(client.clone()) {
            tracing::debug!("Search tool client already installed, keeping the first one");
        }

        let generator: Arc<dyn AnswerGenerator> = if self.generation_enabled {
            tracing::info!(
                provider = self.model.provider.id(),
                model = %self.model.model,
                "Generation enabled"
            );
            Arc::new(LlmAnswerGenerator::new(self.model.clone()))
        } else {
            tracing::info!("Generation disabled, answering extractively");
            Arc::new(DisabledGenerator)
        };

        Ok(AnswerOrchestrator::new(generator, Arc::new(client))
            .with_generation_timeout(self.generation_timeout()))
    }
}
