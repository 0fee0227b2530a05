use std::sync::Arc;
use tracing::info;

use crate::api::{CreateParticipationRequest, ParticipationResponse, UpdateParticipationRequest};
use crate::database::models::ParticipationKey;
use crate::database::repository::{ParticipationRepository, Repositories};
use crate::services::{ensure_valid, ServiceError, ServiceResult};
use crate::validation::ParticipationValidator;

pub struct ParticipationService {
    participation: Arc<dyn ParticipationRepository>,
    validator: ParticipationValidator,
}

impl ParticipationService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            participation: repos.participation.clone(),
            validator: ParticipationValidator::new(
                repos.golfers.clone(),
                repos.tournaments.clone(),
                repos.participation.clone(),
            ),
        }
    }

    pub async fn create(&self, request: CreateParticipationRequest) -> ServiceResult<ParticipationResponse> {
        ensure_valid(self.validator.validate(&request).await?)?;

        let participation = request.to_model();
        let key = self
            .participation
            .create(&participation)
            .await
            .map_err(ServiceError::from_write)?;
        info!(
            golfer_id = key.golfer_id,
            tournament_id = key.tournament_id,
            year = key.year,
            "Recorded tournament participation"
        );

        Ok(participation.into())
    }

    pub async fn get(&self, key: ParticipationKey) -> ServiceResult<Option<ParticipationResponse>> {
        Ok(self.participation.get(key).await?.map(Into::into))
    }

    pub async fn update(
        &self,
        key: ParticipationKey,
        request: UpdateParticipationRequest,
    ) -> ServiceResult<Option<ParticipationResponse>> {
        ensure_valid(ParticipationValidator::validate_score(request.score))?;
        let updated = self.participation.update_score(key, request.score).await?;
        Ok(updated.map(Into::into))
    }

    pub async fn delete(&self, key: ParticipationKey) -> ServiceResult<bool> {
        let deleted = self.participation.delete(key).await?;
        if deleted {
            info!(?key, "Deleted tournament participation");
        }
        Ok(deleted)
    }
}
