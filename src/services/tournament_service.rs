use std::sync::Arc;
use tracing::info;

use crate::api::{TournamentRequest, TournamentResponse, UpdateTournamentRequest};
use crate::database::repository::{Repositories, TournamentRepository};
use crate::services::{ensure_same_id, ensure_valid, ServiceError, ServiceResult};
use crate::validation::TournamentValidator;

pub struct TournamentService {
    tournaments: Arc<dyn TournamentRepository>,
    validator: TournamentValidator,
}

impl TournamentService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            tournaments: repos.tournaments.clone(),
            validator: TournamentValidator::new(repos.tournaments.clone()),
        }
    }

    pub async fn create(&self, request: TournamentRequest) -> ServiceResult<TournamentResponse> {
        ensure_valid(self.validator.validate(&request, None).await?)?;

        let input = request.to_input();
        let id = self.tournaments.create(&input).await.map_err(ServiceError::from_write)?;
        info!(tournament_id = id, name = %input.name, "Created tournament");

        Ok(TournamentResponse::created(id, input))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<TournamentResponse>> {
        Ok(self.tournaments.get_by_id(id).await?.map(Into::into))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<TournamentResponse>> {
        let tournaments = self.tournaments.get_all().await?;
        Ok(tournaments.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTournamentRequest,
    ) -> ServiceResult<Option<TournamentResponse>> {
        ensure_same_id(id, request.id)?;
        ensure_valid(self.validator.validate(&request.tournament, Some(id)).await?)?;

        let updated = self
            .tournaments
            .update(id, &request.tournament.to_input())
            .await
            .map_err(ServiceError::from_write)?;
        Ok(updated.map(Into::into))
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<bool> {
        let deleted = self.tournaments.delete_by_id(id).await?;
        if deleted {
            info!(tournament_id = id, "Deleted tournament");
        }
        Ok(deleted)
    }
}
