//! # Radkit-Compatible Tools
//!
//! Tools annotated with `#[tool]` macro, callable by the generation phase.

pub mod search_tools;
