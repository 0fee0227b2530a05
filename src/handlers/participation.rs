use axum::extract::{rejection::QueryRejection, Query, State};

use crate::api::{
    CreateParticipationRequest, GolferParticipationRequest, ParticipationQuery, ParticipationResponse,
    TournamentEntryRequest, UpdateParticipationRequest,
};
use crate::database::models::ParticipationKey;
use crate::error::ApiError;
use crate::handlers::not_found;
use crate::middleware::{ApiResponse, ApiResult, ValidJson, ValidPath};
use crate::state::AppState;

/// The composite key travels in the query string; all three parts are required
fn participation_key(query: Result<Query<ParticipationQuery>, QueryRejection>) -> Result<ParticipationKey, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    match (query.golfer_id, query.tournament_id, query.year) {
        (Some(golfer_id), Some(tournament_id), Some(year)) => Ok(ParticipationKey {
            golfer_id,
            tournament_id,
            year,
        }),
        _ => Err(ApiError::bad_request("golferId, tournamentId and year are all required")),
    }
}

fn missing(key: ParticipationKey) -> ApiError {
    not_found(
        "Tournament participation",
        format_args!("({}, {}, {})", key.golfer_id, key.tournament_id, key.year),
    )
}

async fn record(state: &AppState, request: CreateParticipationRequest) -> ApiResult<ParticipationResponse> {
    let participation = state.participation.create(request).await?;
    let location = participation.location();
    Ok(ApiResponse::created(participation, location))
}

/// POST /api/tournamentparticipation
pub async fn post(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateParticipationRequest>,
) -> ApiResult<ParticipationResponse> {
    record(&state, request).await
}

/// POST /api/golfers/:id/tournamentparticipation
pub async fn post_for_golfer(
    State(state): State<AppState>,
    ValidPath(golfer_id): ValidPath<i32>,
    ValidJson(request): ValidJson<GolferParticipationRequest>,
) -> ApiResult<ParticipationResponse> {
    record(&state, request.for_golfer(golfer_id)).await
}

/// POST /api/tournaments/:id/tournamentparticipation
pub async fn post_for_tournament(
    State(state): State<AppState>,
    ValidPath(tournament_id): ValidPath<i32>,
    ValidJson(request): ValidJson<TournamentEntryRequest>,
) -> ApiResult<ParticipationResponse> {
    record(&state, request.for_tournament(tournament_id)).await
}

/// GET /api/tournamentparticipation?golferId=&tournamentId=&year=
pub async fn get(
    State(state): State<AppState>,
    query: Result<Query<ParticipationQuery>, QueryRejection>,
) -> ApiResult<ParticipationResponse> {
    let key = participation_key(query)?;
    state
        .participation
        .get(key)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| missing(key))
}

/// PUT /api/tournamentparticipation?golferId=&tournamentId=&year= - score only
pub async fn put(
    State(state): State<AppState>,
    query: Result<Query<ParticipationQuery>, QueryRejection>,
    ValidJson(request): ValidJson<UpdateParticipationRequest>,
) -> ApiResult<ParticipationResponse> {
    let key = participation_key(query)?;
    state
        .participation
        .update(key, request)
        .await?
        .map(ApiResponse::ok)
        .ok_or_else(|| missing(key))
}

/// DELETE /api/tournamentparticipation?golferId=&tournamentId=&year=
pub async fn delete(
    State(state): State<AppState>,
    query: Result<Query<ParticipationQuery>, QueryRejection>,
) -> ApiResult<()> {
    let key = participation_key(query)?;
    if state.participation.delete(key).await? {
        Ok(ApiResponse::no_content())
    } else {
        Err(missing(key))
    }
}
