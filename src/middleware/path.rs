use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Path<T>` whose rejection is rendered as an [`ApiError`] body
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ValidPath(value)),
            Err(rejection) => Err(path_error(rejection)),
        }
    }
}

fn path_error(rejection: PathRejection) -> ApiError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => ApiError::bad_request(err.body_text()),
        other => {
            tracing::error!("Path extraction failed: {}", other.body_text());
            ApiError::internal_server_error("An unexpected error occurred")
        }
    }
}
