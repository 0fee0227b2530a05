use axum::extract::State;
use std::sync::Arc;

use crate::auth::{JwtKeys, TokenRequest};
use crate::error::ApiError;
use crate::middleware::ValidJson;

/// POST /api/tokens - Mint a signed token (text/plain) for local testing
pub async fn post(
    State(keys): State<Arc<JwtKeys>>,
    ValidJson(request): ValidJson<TokenRequest>,
) -> Result<String, ApiError> {
    let token = keys.issue(&request).map_err(|e| {
        tracing::error!("Token generation failed: {}", e);
        ApiError::internal_server_error("Failed to generate token")
    })?;
    tracing::info!(admin = request.is_admin, trusted = request.is_trusted, "Issued token");
    Ok(token)
}
