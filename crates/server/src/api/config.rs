//! # Config API
//!
//! Read-only views of the running configuration.

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;
use wikiagent_core::config::AgentConfig;
use wikiagent_core::models::LlmProvider;

use super::SharedState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    #[schema(value_type = Object)]
    pub config: AgentConfig,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderInfo {
    id: String,
    name: String,
    default_model: String,
    supports_base_url: bool,
    env_var: String,
    /// Whether this is the provider answering questions right now
    active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProvidersResponse {
    providers: Vec<ProviderInfo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    generation_enabled: bool,
}

/// Get the effective configuration
#[utoipa::path(
    get,
    path = "/api/v1/config",
    tag = "config",
    responses(
        (status = 200, description = "Effective configuration", body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<SharedState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        config: state.config.clone(),
    })
}

/// Get available LLM providers
#[utoipa::path(
    get,
    path = "/api/v1/providers",
    tag = "providers",
    responses(
        (status = 200, description = "List of supported LLM providers", body = ProvidersResponse)
    )
)]
pub async fn get_providers(State(state): State<SharedState>) -> Json<ProvidersResponse> {
    let active = state.config.model.provider;
    let providers = LlmProvider::all()
        .into_iter()
        .map(|provider| ProviderInfo {
            id: provider.id().to_string(),
            name: provider.display_name().to_string(),
            default_model: provider.default_model().to_string(),
            supports_base_url: provider.supports_base_url(),
            env_var: provider.env_var().to_string(),
            active: state.config.generation_enabled && provider == active,
        })
        .collect();

    Json(ProvidersResponse { providers })
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "config",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        generation_enabled: state.config.generation_enabled,
    })
}
