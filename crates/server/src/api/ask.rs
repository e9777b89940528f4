//! # Ask API
//!
//! `POST /api/ask` and `POST /api/v1/ask`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wikiagent_core::error::QuestionError;
use wikiagent_core::orchestrator::{Answer, Question};

use super::SharedState;

/// Answer text returned when the request could not be processed
pub const FAILURE_ANSWER: &str = "Failed to process question.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    /// Free-text factual question
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnswerResponse {
    /// Answer text, never empty
    pub answer: String,
    /// Wikipedia URLs the answer was drawn from
    pub sources: Vec<String>,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer: answer.answer,
            sources: answer.sources,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Answer a question from Wikipedia
#[utoipa::path(
    post,
    path = "/api/v1/ask",
    tag = "ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Grounded answer with sources", body = AnswerResponse),
        (status = 400, description = "Missing or blank question", body = ErrorResponse),
        (status = 500, description = "Answering failed unexpectedly", body = AnswerResponse)
    )
)]
pub async fn ask(
    State(state): State<SharedState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Response {
    let question = match payload {
        Ok(Json(req)) => Question::new(req.question.unwrap_or_default()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected ask body");
            Err(QuestionError::Empty)
        }
    };

    let question = match question {
        Ok(question) => question,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    // Run on its own task so a panic anywhere below becomes a 500
    let orchestrator = state.orchestrator.clone();
    let task =
        tokio::spawn(async move { orchestrator.answer_question_traced(&question).await });

    match task.await {
        Ok(outcome) => {
            tracing::info!(
                phase = outcome.phase.label(),
                sources = outcome.answer.sources.len(),
                "Question answered"
            );
            (StatusCode::OK, Json(AnswerResponse::from(outcome.answer))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Answer task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnswerResponse {
                    answer: FAILURE_ANSWER.to_string(),
                    sources: Vec::new(),
                }),
            )
                .into_response()
        }
    }
}
