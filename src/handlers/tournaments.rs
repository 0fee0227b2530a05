use axum::extract::State;

use crate::api::{TournamentRequest, TournamentResponse, UpdateTournamentRequest};
use crate::handlers::not_found;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidPath};
use crate::state::AppState;

/// GET /api/tournaments - All tournaments with their participants
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<TournamentResponse>> {
    Ok(ApiResponse::ok(state.tournaments.get_all().await?))
}

/// GET /api/tournaments/:id
pub async fn get(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<TournamentResponse> {
    state
        .tournaments
        .get_by_id(id)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Tournament", id))
}

/// POST /api/tournaments
pub async fn post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<TournamentRequest>,
) -> ApiResult<TournamentResponse> {
    let tournament = state.tournaments.create(request).await?;
    let location = format!("/api/tournaments/{}", tournament.id);
    Ok(ApiResponse::created(tournament, location))
}

/// PUT /api/tournaments/:id
pub async fn put(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(request): ValidJson<UpdateTournamentRequest>,
) -> ApiResult<TournamentResponse> {
    state
        .tournaments
        .update(id, request)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| not_found("Tournament", id))
}

/// DELETE /api/tournaments/:id
pub async fn delete(State(state): State<AppState>, ValidPath(id): ValidPath<i32>) -> ApiResult<()> {
    if state.tournaments.delete(id).await? {
        Ok(ApiResponse::no_content())
    } else {
        Err(not_found("Tournament", id))
    }
}
