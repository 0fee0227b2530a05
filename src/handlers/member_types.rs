use axum::extract::State;

use crate::api::{MemberTypeRequest, MemberTypeResponse, UpdateMemberTypeRequest};
use crate::handlers::not_found;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidPath};
use crate::state::AppState;

/// GET /api/membertypes
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<MemberTypeResponse>> {
    Ok(ApiResponse::ok(state.member_types.get_all().await?))
}

/// GET /api/membertypes/:id
pub async fn get(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<MemberTypeResponse> {
    state
        .member_types
        .get_by_id(id)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Member type", id))
}

/// POST /api/membertypes
pub async fn post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<MemberTypeRequest>,
) -> ApiResult<MemberTypeResponse> {
    let member_type = state.member_types.create(request).await?;
    let location = format!("/api/membertypes/{}", member_type.id);
    Ok(ApiResponse::created(member_type, location))
}

/// PUT /api/membertypes/:id
pub async fn put(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(request): ValidJson<UpdateMemberTypeRequest>,
) -> ApiResult<MemberTypeResponse> {
    state
        .member_types
        .update(id, request)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Member type", id))
}

/// DELETE /api/membertypes/:id - 409 while members still reference it
pub async fn delete(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<()> {
    if state.member_types.delete(id).await? {
        Ok(ApiResponse::no_content())
    } else {
        Err(not_found("Member type", id))
    }
}
