use axum::extract::State;

use crate::api::{MemberRequest, MemberResponse, UpdateMemberRequest};
use crate::handlers::not_found;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidPath};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<MemberResponse>> {
    Ok(ApiResponse::ok(state.members.get_all().await?))
}

pub async fn get(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<MemberResponse> {
    state
        .members
        .get_by_id(id)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Member", id))
}

pub async fn post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<MemberRequest>,
) -> ApiResult<MemberResponse> {
    let member = state.members.create(request).await?;
    let location = format!("/api/members/{}", member.id);
    Ok(ApiResponse::created(member, location))
}

pub async fn put(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(request): ValidJson<UpdateMemberRequest>,
) -> ApiResult<MemberResponse> {
    state
        .members
        .update(id, request)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Member", id))
}

pub async fn delete(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<()> {
    if state.members.delete(id).await? {
        Ok(ApiResponse::no_content())
    } else {
        Err(not_found("Member", id))
    }
}
