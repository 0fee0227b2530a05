use std::sync::Arc;
use tracing::info;

use crate::api::{MemberRequest, MemberResponse, UpdateMemberRequest};
use crate::database::manager::DatabaseError;
use crate::database::repository::{MemberRepository, Repositories};
use crate::services::{ensure_same_id, ensure_valid, ServiceError, ServiceResult};
use crate::validation::MemberValidator;

pub struct MemberService {
    members: Arc<dyn MemberRepository>,
    validator: MemberValidator,
}

impl MemberService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            members: repos.members.clone(),
            validator: MemberValidator::new(repos.member_types.clone()),
        }
    }

    /// The response carries the member type's name, so the new row is read
    /// back after the insert.
    pub async fn create(&self, request: MemberRequest) -> ServiceResult<MemberResponse> {
        ensure_valid(self.validator.validate(&request).await?)?;

        let id = self
            .members
            .create(&request.to_input())
            .await
            .map_err(ServiceError::from_write)?;
        info!(member_id = id, "Created member");

        match self.members.get_by_id(id).await? {
            Some(member) => Ok(member.into()),
            None => Err(DatabaseError::QueryError(format!("member {} missing after insert", id)).into()),
        }
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<Option<MemberResponse>> {
        Ok(self.members.get_by_id(id).await?.map(Into::into))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.members.get_all().await?;
        Ok(members.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i32, request: UpdateMemberRequest) -> ServiceResult<Option<MemberResponse>> {
        ensure_same_id(id, request.id)?;
        ensure_valid(self.validator.validate(&request.member).await?)?;

        let updated = self
            .members
            .update(id, &request.member.to_input())
            .await
            .map_err(ServiceError::from_write)?;
        Ok(updated.map(Into::into))
    }

    pub async fn delete(&self, id: i32) -> ServiceResult<bool> {
        let deleted = self.members.delete_by_id(id).await?;
        if deleted {
            info!(member_id = id, "Deleted member");
        }
        Ok(deleted)
    }
}
