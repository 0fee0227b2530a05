use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Tournament, TournamentInput, TournamentRow};
use crate::database::repository::TournamentRepository;
use crate::database::stitch::{stitch, stitch_one};

pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn create(&self, tournament: &TournamentInput) -> Result<i32, DatabaseError> {
        let id = sqlx::query_scalar::<_, i32>("SELECT tournament_create($1, $2)")
            .bind(&tournament.name)
            .bind(&tournament.format)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, DatabaseError> {
        let rows = sqlx::query_as::<_, TournamentRow>("SELECT * FROM tournament_get_by_id($1)")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        stitch_one(rows)
    }

    async fn get_all(&self) -> Result<Vec<Tournament>, DatabaseError> {
        let rows = sqlx::query_as::<_, TournamentRow>("SELECT * FROM tournament_get_all()")
            .fetch_all(&self.pool)
            .await?;
        Ok(stitch(rows))
    }

    async fn update(&self, id: i32, tournament: &TournamentInput) -> Result<Option<Tournament>, DatabaseError> {
        let changed = sqlx::query_scalar::<_, i32>("SELECT tournament_update($1, $2, $3)")
            .bind(id)
            .bind(&tournament.name)
            .bind(&tournament.format)
            .fetch_one(&self.pool)
            .await?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, bool>("SELECT tournament_delete($1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn find_id_by_name_and_format(&self, name: &str, format: &str) -> Result<Option<i32>, DatabaseError> {
        let id = sqlx::query_scalar::<_, Option<i32>>("SELECT tournament_find_id_by_name_and_format($1, $2)")
            .bind(name)
            .bind(format)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT tournament_exists($1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
