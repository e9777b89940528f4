//! # Errors
//!
//! Typed failures raised inside the core. None of these reach the caller of
//! the orchestrator: the Wikipedia client degrades them to empty or partial
//! results, and question validation happens at the request boundary.

use thiserror::Error;

/// Failure of a single outbound Wikipedia request
#[derive(Debug, Error)]
pub enum WikiError {
    /// Transport failure, including timeouts
    #[error("request to Wikipedia failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Wikipedia responded with status {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the JSON shape we expected
    #[error("could not decode Wikipedia response: {0}")]
    Decode(String),
}

/// Rejection of inbound question text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question is required")]
    Empty,
}
