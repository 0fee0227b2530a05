use axum::extract::State;

use crate::api::{GolferRequest, GolferResponse, UpdateGolferRequest};
use crate::handlers::not_found;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidPath};
use crate::state::AppState;

/// GET /api/golfers - All golfers with their tournament history
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<GolferResponse>> {
    Ok(ApiResponse::ok(state.golfers.get_all().await?))
}

/// GET /api/golfers/:id
pub async fn get(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<GolferResponse> {
    state
        .golfers
        .get_by_id(id)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Golfer", id))
}

/// POST /api/golfers
pub async fn post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<GolferRequest>,
) -> ApiResult<GolferResponse> {
    let golfer = state.golfers.create(request).await?;
    let location = format!("/api/golfers/{}", golfer.id);
    Ok(ApiResponse::created(golfer, location))
}

/// PUT /api/golfers/:id - Body id must match the path id
pub async fn put(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(request): ValidJson<UpdateGolferRequest>,
) -> ApiResult<GolferResponse> {
    state
        .golfers
        .update(id, request)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Golfer", id))
}

/// DELETE /api/golfers/:id
pub async fn delete(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<()> {
    if state.golfers.delete(id).await? {
        Ok(ApiResponse::no_content())
    } else {
        Err(not_found("Golfer", id))
    }
}
