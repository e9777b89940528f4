//! # WikiAgent API
//!
//! HTTP boundary around the answer orchestrator.

use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use wikiagent_core::config::AgentConfig;
use wikiagent_core::orchestrator::AnswerOrchestrator;

pub mod ask;
pub mod config;

/// Application state
pub struct AppState {
    pub orchestrator: AnswerOrchestrator,
    /// Effective configuration, fixed at startup
    pub config: AgentConfig,
}

pub type SharedState = Arc<AppState>;

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WikiAgent API",
        version = "1.0.0",
        description = "Answers factual questions from Wikipedia with cited sources"
    ),
    paths(ask::ask, config::get_config, config::get_providers, config::health),
    components(schemas(
        ask::AskRequest,
        ask::AnswerResponse,
        ask::ErrorResponse,
        config::ConfigResponse,
        config::ProvidersResponse,
        config::ProviderInfo,
        config::HealthResponse
    )),
    tags(
        (name = "ask", description = "Question answering"),
        (name = "config", description = "Effective configuration"),
        (name = "providers", description = "LLM provider discovery")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    ([(header::CONTENT_TYPE, "application/json")], spec)
}

/// Build the full router
pub fn router(state: SharedState) -> Router {
    let v1_routes = Router::new()
        .route("/ask", post(ask::ask))
        .route("/config", get(config::get_config))
        .route("/providers", get(config::get_providers))
        .route("/health", get(config::health))
        .route("/openapi.json", get(serve_openapi));

    Router::new()
        // Unversioned path kept for existing chat clients
        .route("/api/ask", post(ask::ask))
        .nest("/api/v1", v1_routes)
        .with_state(state)
}
