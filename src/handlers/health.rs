use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// GET /_health - database connectivity, as plain text
pub async fn get(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.health.check().await {
        Ok(()) => (StatusCode::OK, "Healthy"),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Unhealthy")
        }
    }
}
