use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{ParticipationKey, TournamentParticipation};
use crate::database::repository::ParticipationRepository;

pub struct PgParticipationRepository {
    pool: PgPool,
}

impl PgParticipationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipationRepository for PgParticipationRepository {
    async fn create(&self, participation: &TournamentParticipation) -> Result<ParticipationKey, DatabaseError> {
        sqlx::query("SELECT participation_create($1, $2, $3, $4)")
            .bind(participation.golfer_id)
            .bind(participation.tournament_id)
            .bind(participation.year)
            .bind(participation.score)
            .execute(&self.pool)
            .await?;
        Ok(participation.key())
    }

    async fn get(&self, key: ParticipationKey) -> Result<Option<TournamentParticipation>, DatabaseError> {
        let row = sqlx::query_as::<_, TournamentParticipation>("SELECT * FROM participation_get($1, $2, $3)")
            .bind(key.golfer_id)
            .bind(key.tournament_id)
            .bind(key.year)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_score(
        &self,
        key: ParticipationKey,
        score: Option<i32>,
    ) -> Result<Option<TournamentParticipation>, DatabaseError> {
        let changed = sqlx::query_scalar::<_, i32>("SELECT participation_update($1, $2, $3, $4)")
            .bind(key.golfer_id)
            .bind(key.tournament_id)
            .bind(key.year)
            .bind(score)
            .fetch_one(&self.pool)
            .await?;
        if changed == 0 {
            return Ok(None);
        }
        self.get(key).await
    }

    async fn delete(&self, key: ParticipationKey) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, bool>("SELECT participation_delete($1, $2, $3)")
            .bind(key.golfer_id)
            .bind(key.tournament_id)
            .bind(key.year)
            .fetch_one(&self.pool)
            .await?;
        Ok(deleted)
    }
}
