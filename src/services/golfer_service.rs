use std::sync::Arc;
use tracing::info;

use crate::api::{GolferRequest, GolferResponse, UpdateGolferRequest};
use crate::database::repository::{GolferRepository, Repositories};
use crate::services::{ensure_same_id, ensure_valid, ServiceError, ServiceResult};
use crate::validation::GolferValidator;

pub struct GolferService {
    golfers: Arc<dyn GolferRepository>,
    validator: GolferValidator,
}

impl GolferService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            golfers: repos.golfers.clone(),
            validator: GolferValidator::new(repos.golfers.clone()),
        }
    }

    pub async fn create(&self, request: GolferRequest) -> ServiceResult<GolferResponse> {
        ensure_valid(self.validator.validate(&request, None).await?)?;

        let input = request.to_input();
        let id = self.golfers.create(&input).await.map_err(ServiceError::from_write)?;
        info!(golfer_id = id, "Created golfer");

        Ok(GolferResponse::created(id, input))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<GolferResponse>> {
        Ok(self.golfers.get_by_id(id).await?.map(Into::into))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<GolferResponse>> {
        let golfers = self.golfers.get_all().await?;
        Ok(golfers.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i32, request: UpdateGolferRequest) -> ServiceResult<Option<GolferResponse>> {
        ensure_same_id(id, request.id)?;
        ensure_valid(self.validator.validate(&request.golfer, Some(id)).await?)?;

        let updated = self
            .golfers
            .update(id, &request.golfer.to_input())
            .await
            .map_err(ServiceError::from_write)?;
        Ok(updated.map(Into::into))
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<bool> {
        let deleted = self.golfers.delete_by_id(id).await?;
        if deleted {
            info!(golfer_id = id, "Deleted golfer");
        }
        Ok(deleted)
    }
}
