//! # WikiAgent Core
//!
//! Answers free-text factual questions from Wikipedia with citation links.
//!
//! ## Architecture
//!
//! - `wiki/` - Wikipedia search + extract client, snippet records
//! - `skills/` - Prompt template, LLM worker dispatch, `wikipedia_search` tool
//! - `orchestrator/` - Generation first, extractive fallback second
//! - `models` - LLM provider configuration
//! - `config` - File and environment configuration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wikiagent_core::config::AgentConfig;
//! use wikiagent_core::orchestrator::Question;
//!
//! let orchestrator = AgentConfig::load().await.build_orchestrator()?;
//! let answer = orchestrator
//!     .answer_question(&Question::new("Who discovered penicillin?")?)
//!     .await;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod skills;
pub mod wiki;
