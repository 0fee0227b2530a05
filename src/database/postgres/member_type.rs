use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{MemberType, MemberTypeInput};
use crate::database::repository::MemberTypeRepository;

pub struct PgMemberTypeRepository {
    pool: PgPool,
}

impl PgMemberTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberTypeRepository for PgMemberTypeRepository {
    async fn create(&self, member_type: &MemberTypeInput) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT member_type_create($1, $2)")
            .bind(&member_type.name)
            .bind(member_type.fee)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<MemberType>, DatabaseError> {
        let row = sqlx::query_as::<_, MemberType>("SELECT * FROM member_type_get_by_id($1)")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_all(&self) -> Result<Vec<MemberType>, DatabaseError> {
        let rows = sqlx::query_as::<_, MemberType>("SELECT * FROM member_type_get_all()")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i32, member_type: &MemberTypeInput) -> Result<Option<MemberType>, DatabaseError> {
        let changed = sqlx::query_scalar::<_, i32>("SELECT member_type_update($1, $2, $3)")
            .bind(id)
            .bind(&member_type.name)
            .bind(member_type.fee)
            .fetch_one(&self.pool)
            .await?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, bool>("SELECT member_type_delete($1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DatabaseError> {
        let id = sqlx::query_scalar::<_, Option<i32>>("SELECT member_type_find_id_by_name($1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }
}
