use std::sync::Arc;
use tracing::info;

use crate::api::{MemberTypeRequest, MemberTypeResponse, UpdateMemberTypeRequest};
use crate::database::repository::{MemberTypeRepository, Repositories};
use crate::services::{ensure_same_id, ensure_valid, ServiceError, ServiceResult};
use crate::validation::MemberTypeValidator;

pub struct MemberTypeService {
    member_types: Arc<dyn MemberTypeRepository>,
    validator: MemberTypeValidator,
}

impl MemberTypeService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            member_types: repos.member_types.clone(),
            validator: MemberTypeValidator::new(repos.member_types.clone()),
        }
    }

    pub async fn create(&self, request: MemberTypeRequest) -> ServiceResult<MemberTypeResponse> {
        ensure_valid(self.validator.validate(&request, None).await?)?;

        let input = request.to_input();
        let id = self.member_types.create(&input).await.map_err(ServiceError::from_write)?;
        info!(member_type_id = id, "Created member type");

        Ok(MemberTypeResponse {
            id,
            name: input.name,
            fee: input.fee,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<MemberTypeResponse>> {
        Ok(self.member_types.get_by_id(id).await?.map(Into::into))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<MemberTypeResponse>> {
        let member_types = self.member_types.get_all().await?;
        Ok(member_types.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateMemberTypeRequest,
    ) -> ServiceResult<Option<MemberTypeResponse>> {
        ensure_same_id(id, request.id)?;
        ensure_valid(self.validator.validate(&request.member_type, Some(id)).await?)?;

        let updated = self
            .member_types
            .update(id, &request.member_type.to_input())
            .await
            .map_err(ServiceError::from_write)?;
        Ok(updated.map(Into::into))
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<bool> {
        let deleted = self.member_types.delete_by_id(id).await?;
        if deleted {
            info!(member_type_id = id, "Deleted member type");
        }
        Ok(deleted)
    }
}
