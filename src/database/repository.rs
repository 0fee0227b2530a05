use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::database::manager::DatabaseError;
use crate::database::models::{
    Golfer, GolferInput, Member, MemberInput, MemberType, MemberTypeInput, ParticipationKey,
    Tournament, TournamentInput, TournamentParticipation,
};
use crate::database::postgres::{
    PgGolferRepository, PgMemberRepository, PgMemberTypeRepository, PgParticipationRepository,
    PgTournamentRepository,
};

/// `update` returning `Ok(None)` means the row does not exist; it is never
/// used to signal invalid input.
#[async_trait]
pub trait GolferRepository: Send + Sync {
    async fn create(&self, golfer: &GolferInput) -> Result<i32, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Golfer>, DatabaseError>;
    async fn get_all(&self) -> Result<Vec<Golfer>, DatabaseError>;
    async fn update(&self, id: i32, golfer: &GolferInput) -> Result<Option<Golfer>, DatabaseError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn find_id_by_email(&self, email: &str) -> Result<Option<i32>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn create(&self, tournament: &TournamentInput) -> Result<i32, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, DatabaseError>;
    async fn get_all(&self) -> Result<Vec<Tournament>, DatabaseError>;
    async fn update(&self, id: i32, tournament: &TournamentInput) -> Result<Option<Tournament>, DatabaseError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn find_id_by_name_and_format(&self, name: &str, format: &str) -> Result<Option<i32>, DatabaseError>;
    async fn exists(&self, id: i32) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    async fn create(&self, participation: &TournamentParticipation) -> Result<ParticipationKey, DatabaseError>;
    async fn get(&self, key: ParticipationKey) -> Result<Option<TournamentParticipation>, DatabaseError>;
    async fn update_score(
        &self,
        key: ParticipationKey,
        score: Option<i32>,
    ) -> Result<Option<TournamentParticipation>, DatabaseError>;
    async fn delete(&self, key: ParticipationKey) -> Result<bool, DatabaseError>;
}

#[async_trait]
pub trait MemberTypeRepository: Send + Sync {
    async fn create(&self, member_type: &MemberTypeInput) -> Result<i32, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<MemberType>, DatabaseError>;
    async fn get_all(&self) -> Result<Vec<MemberType>, DatabaseError>;
    async fn update(&self, id: i32, member_type: &MemberTypeInput) -> Result<Option<MemberType>, DatabaseError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError>;
    async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DatabaseError>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, member: &MemberInput) -> Result<i32, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DatabaseError>;
    async fn get_all(&self) -> Result<Vec<Member>, DatabaseError>;
    async fn update(&self, id: i32, member: &MemberInput) -> Result<Option<Member>, DatabaseError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError>;
}

/// One handle per aggregate, shared by services and validators
#[derive(Clone)]
pub struct Repositories {
    pub golfers: Arc<dyn GolferRepository>,
    pub tournaments: Arc<dyn TournamentRepository>,
    pub participation: Arc<dyn ParticipationRepository>,
    pub member_types: Arc<dyn MemberTypeRepository>,
    pub members: Arc<dyn MemberRepository>,
}

impl Repositories {
    /// Stored-procedure backed repositories over one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            golfers: Arc::new(PgGolferRepository::new(pool.clone())),
            tournaments: Arc::new(PgTournamentRepository::new(pool.clone())),
            participation: Arc::new(PgParticipationRepository::new(pool.clone())),
            member_types: Arc::new(PgMemberTypeRepository::new(pool.clone())),
            members: Arc::new(PgMemberRepository::new(pool)),
        }
    }
}
