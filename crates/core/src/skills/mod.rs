//! # WikiAgent Skills
//!
//! Everything the generation phase is handed: the instruction template,
//! the provider dispatch, and the tools it may call.
//!
//! ## Architecture
//!
//! ```text
//! LlmWorker<Answer>
//!   ├── prompts::WIKI_AGENT (system instructions)
//!   └── tools::search_tools::wikipedia_search (#[tool])
//! ```

pub mod llm_helpers;
pub mod prompts;
pub mod tools;
