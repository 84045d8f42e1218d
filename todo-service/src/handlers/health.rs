use axum::{Json, extract::State};
use serde_json::json;

use crate::startup::AppState;

/// Health check endpoint for Docker/K8s liveness probes.
///
/// Always reports healthy; no dependency checks and no failure path.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": state.config.service_name,
        "version": state.config.service_version,
    }))
}
