use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::{JwtKeys, Policy};
use crate::error::ApiError;

/// Per-route state for [`require_policy`]
#[derive(Clone)]
pub struct AuthGate {
    pub policy: Policy,
    pub keys: Arc<JwtKeys>,
}

/// Validates the bearer token and checks it against the route's policy.
/// Verified claims are injected into the request extensions.
pub async fn require_policy(
    State(gate): State<AuthGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = extract_jwt_from_headers(request.headers()).map_err(|msg| {
            tracing::warn!("Rejected request to {}: {}", request.uri().path(), msg);
            ApiError::unauthorized(msg)
        })?;
        gate.keys.validate(token).map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            ApiError::unauthorized("Invalid or expired token")
        })?
    };

    if !claims.satisfies(gate.policy) {
        tracing::warn!(
            sub = %claims.sub,
            policy = ?gate.policy,
            "Token lacks the claim required for {}",
            request.uri().path()
        );
        return Err(ApiError::forbidden("Insufficient privileges for this operation"));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err("Empty JWT token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_prefix_required() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_jwt_from_headers(&headers), Err("Missing Authorization header"));

        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert!(extract_jwt_from_headers(&headers).is_err());

        headers.insert("authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(extract_jwt_from_headers(&headers), Err("Empty JWT token"));

        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_jwt_from_headers(&headers), Ok("abc.def.ghi"));
    }
}
