use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether an obfuscation API key is configured.
    pub obfuscator_configured: bool,
    /// Whether a notification webhook is configured.
    pub webhook_configured: bool,
}

/// GET /health -- returns service status and which integrations are enabled.
///
/// Missing integrations do not make the service unhealthy; submissions
/// still succeed with the original script.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.pipeline.config();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        obfuscator_configured: config.api_key.is_some(),
        webhook_configured: config.webhook_url.is_some(),
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
