use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Golfer, GolferInput, GolferRow};
use crate::database::repository::GolferRepository;
use crate::database::stitch::{stitch, stitch_one};

pub struct PgGolferRepository {
    pool: PgPool,
}

impl PgGolferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GolferRepository for PgGolferRepository {
    async fn create(&self, golfer: &GolferInput) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT golfer_create($1, $2, $3, $4, $5)")
            .bind(&golfer.first_name)
            .bind(&golfer.last_name)
            .bind(&golfer.email)
            .bind(golfer.join_date)
            .bind(golfer.handicap)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Golfer>, DatabaseError> {
        let rows = sqlx::query_as::<_, GolferRow>("SELECT * FROM golfer_get_by_id($1)")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        stitch_one(rows)
    }

    async fn get_all(&self) -> Result<Vec<Golfer>, DatabaseError> {
        let rows = sqlx::query_as::<_, GolferRow>("SELECT * FROM golfer_get_all()")
            .fetch_all(&self.pool)
            .await?;
        Ok(stitch(rows))
    }

    async fn update(&self, id: i32, golfer: &GolferInput) -> Result<Option<Golfer>, DatabaseError> {
        let changed = sqlx::query_scalar::<_, i32>("SELECT golfer_update($1, $2, $3, $4, $5, $6)")
            .bind(id)
            .bind(&golfer.first_name)
            .bind(&golfer.last_name)
            .bind(&golfer.email)
            .bind(golfer.join_date)
            .bind(golfer.handicap)
            .fetch_one(&self.pool)
            .await?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, bool>("SELECT golfer_delete($1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i32>, DatabaseError> {
        let id = sqlx::query_scalar::<_, Option<i32>>("SELECT golfer_find_id_by_email($1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT golfer_exists($1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
