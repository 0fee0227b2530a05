use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Member, MemberInput};
use crate::database::repository::MemberRepository;

pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn create(&self, member: &MemberInput) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT member_create($1, $2, $3, $4)")
            .bind(&member.first_name)
            .bind(&member.last_name)
            .bind(&member.email)
            .bind(member.member_type_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DatabaseError> {
        let row = sqlx::query_as::<_, Member>("SELECT * FROM member_get_by_id($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<Member>, DatabaseError> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM member_get_all()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, member: &MemberInput) -> Result<Option<Member>, DatabaseError> {
        let changed = sqlx::query_scalar::<_, i32>("SELECT member_update($1, $2, $3, $4, $5)")
            .bind(id)
            .bind(&member.first_name)
            .bind(&member.last_name)
            .bind(&member.email)
            .bind(member.member_type_id)
            .fetch_one(&self.pool)
            .await?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, bool>("SELECT member_delete($1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(deleted)
    }
}
