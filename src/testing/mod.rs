//! In-memory repositories for tests.
//!
//! [`InMemoryStore`] implements every repository trait over one set of tables
//! guarded by a mutex, and enforces the same unique and foreign-key
//! constraints (under the same constraint names) as the PostgreSQL schema, so
//! services see identical failures. Optional delays widen the window between
//! a validator's lookup and the write that follows it.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::database::manager::{DatabaseError, HealthProbe};
use crate::database::models::{
    Golfer, GolferInput, GolferRow, Member, MemberInput, MemberType, MemberTypeInput, ParticipationKey,
    Tournament, TournamentInput, TournamentParticipation, TournamentRow,
};
use crate::database::repository::{
    GolferRepository, MemberRepository, MemberTypeRepository, ParticipationRepository, Repositories,
    TournamentRepository,
};
use crate::database::stitch::{stitch, stitch_one};

#[derive(Default)]
struct Tables {
    golfers: BTreeMap<i32, GolferInput>,
    tournaments: BTreeMap<i32, TournamentInput>,
    participation: BTreeMap<ParticipationKey, Option<i32>>,
    member_types: BTreeMap<i32, MemberTypeInput>,
    members: BTreeMap<i32, MemberInput>,
    last_golfer_id: i32,
    last_tournament_id: i32,
    last_member_type_id: i32,
    last_member_id: i32,
}

#[derive(Clone, Copy)]
struct Settings {
    lookup_delay: Option<Duration>,
    write_delay: Option<Duration>,
    fail_lookups: bool,
    healthy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookup_delay: None,
            write_delay: None,
            fail_lookups: false,
            healthy: true,
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    settings: Arc<Mutex<Settings>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unique(constraint: &str) -> DatabaseError {
    DatabaseError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

fn foreign_key(constraint: &str) -> DatabaseError {
    DatabaseError::ForeignKeyViolation {
        constraint: constraint.to_string(),
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every repository handle backed by this store
    pub fn repositories(&self) -> Repositories {
        Repositories {
            golfers: Arc::new(self.clone()),
            tournaments: Arc::new(self.clone()),
            participation: Arc::new(self.clone()),
            member_types: Arc::new(self.clone()),
            members: Arc::new(self.clone()),
        }
    }

    /// Sleep before answering uniqueness/existence lookups
    pub fn set_lookup_delay(&self, delay: Duration) {
        lock(&self.settings).lookup_delay = Some(delay);
    }

    /// Sleep before applying inserts
    pub fn set_write_delay(&self, delay: Duration) {
        lock(&self.settings).write_delay = Some(delay);
    }

    /// Make lookups fail as if the database had gone away
    pub fn fail_lookups(&self, fail: bool) {
        lock(&self.settings).fail_lookups = fail;
    }

    pub fn set_healthy(&self, healthy: bool) {
        lock(&self.settings).healthy = healthy;
    }

    fn settings(&self) -> Settings {
        *lock(&self.settings)
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        lock(&self.tables)
    }

    async fn before_lookup(&self) -> Result<(), DatabaseError> {
        let settings = self.settings();
        if let Some(delay) = settings.lookup_delay {
            tokio::time::sleep(delay).await;
        }
        if settings.fail_lookups {
            return Err(DatabaseError::QueryError("lookup failed".to_string()));
        }
        Ok(())
    }

    async fn before_write(&self) {
        if let Some(delay) = self.settings().write_delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn golfer_rows(tables: &Tables, id: i32, golfer: &GolferInput) -> Vec<GolferRow> {
        let base = GolferRow {
            id,
            first_name: golfer.first_name.clone(),
            last_name: golfer.last_name.clone(),
            email: golfer.email.clone(),
            join_date: golfer.join_date,
            handicap: golfer.handicap,
            tournament_id: None,
            tournament_name: None,
            tournament_format: None,
            year: None,
            score: None,
        };

        let mut history: Vec<(&ParticipationKey, &Option<i32>)> = tables
            .participation
            .iter()
            .filter(|(key, _)| key.golfer_id == id)
            .collect();
        history.sort_by_key(|(key, _)| (key.year, key.tournament_id));

        let mut rows: Vec<GolferRow> = history
            .into_iter()
            .filter_map(|(key, score)| {
                let tournament = tables.tournaments.get(&key.tournament_id)?;
                Some(GolferRow {
                    tournament_id: Some(key.tournament_id),
                    tournament_name: Some(tournament.name.clone()),
                    tournament_format: Some(tournament.format.clone()),
                    year: Some(key.year),
                    score: *score,
                    ..base.clone()
                })
            })
            .collect();
        if rows.is_empty() {
            rows.push(base);
        }
        rows
    }

    fn tournament_rows(tables: &Tables, id: i32, tournament: &TournamentInput) -> Vec<TournamentRow> {
        let base = TournamentRow {
            id,
            name: tournament.name.clone(),
            format: tournament.format.clone(),
            golfer_id: None,
            first_name: None,
            last_name: None,
            year: None,
            score: None,
        };

        let mut field: Vec<(&ParticipationKey, &Option<i32>)> = tables
            .participation
            .iter()
            .filter(|(key, _)| key.tournament_id == id)
            .collect();
        field.sort_by_key(|(key, _)| (key.year, key.golfer_id));

        let mut rows: Vec<TournamentRow> = field
            .into_iter()
            .filter_map(|(key, score)| {
                let golfer = tables.golfers.get(&key.golfer_id)?;
                Some(TournamentRow {
                    golfer_id: Some(key.golfer_id),
                    first_name: Some(golfer.first_name.clone()),
                    last_name: Some(golfer.last_name.clone()),
                    year: Some(key.year),
                    score: *score,
                    ..base.clone()
                })
            })
            .collect();
        if rows.is_empty() {
            rows.push(base);
        }
        rows
    }

    fn member_view(tables: &Tables, id: i32, member: &MemberInput) -> Member {
        Member {
            id,
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            email: member.email.clone(),
            member_type_id: member.member_type_id,
            member_type_name: tables
                .member_types
                .get(&member.member_type_id)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl GolferRepository for InMemoryStore {
    async fn create(&self, golfer: &GolferInput) -> Result<i32, DatabaseError> {
        self.before_write().await;
        let mut tables = self.tables();
        if tables.golfers.values().any(|g| g.email == golfer.email) {
            return Err(unique("golfers_email_key"));
        }
        tables.last_golfer_id += 1;
        let id = tables.last_golfer_id;
        tables.golfers.insert(id, golfer.clone());
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Golfer>, DatabaseError> {
        let tables = self.tables();
        match tables.golfers.get(&id) {
            Some(golfer) => stitch_one(Self::golfer_rows(&tables, id, golfer)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Golfer>, DatabaseError> {
        let tables = self.tables();
        let rows: Vec<GolferRow> = tables
            .golfers
            .iter()
            .flat_map(|(id, golfer)| Self::golfer_rows(&tables, *id, golfer))
            .collect();
        Ok(stitch(rows))
    }

    async fn update(&self, id: i32, golfer: &GolferInput) -> Result<Option<Golfer>, DatabaseError> {
        {
            let mut tables = self.tables();
            if !tables.golfers.contains_key(&id) {
                return Ok(None);
            }
            if tables.golfers.iter().any(|(other, g)| *other != id && g.email == golfer.email) {
                return Err(unique("golfers_email_key"));
            }
            tables.golfers.insert(id, golfer.clone());
        }
        GolferRepository::get_by_id(self, id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let mut tables = self.tables();
        if tables.participation.keys().any(|key| key.golfer_id == id) {
            return Err(foreign_key("tournament_participation_golfer_fkey"));
        }
        Ok(tables.golfers.remove(&id).is_some())
    }

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i32>, DatabaseError> {
        self.before_lookup().await?;
        let tables = self.tables();
        Ok(tables
            .golfers
            .iter()
            .find(|(_, g)| g.email == email)
            .map(|(id, _)| *id))
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        self.before_lookup().await?;
        Ok(self.tables().golfers.contains_key(&id))
    }
}

#[async_trait]
impl TournamentRepository for InMemoryStore {
    async fn create(&self, tournament: &TournamentInput) -> Result<i32, DatabaseError> {
        self.before_write().await;
        let mut tables = self.tables();
        if tables.tournaments.values().any(|t| t == tournament) {
            return Err(unique("tournaments_name_format_key"));
        }
        tables.last_tournament_id += 1;
        let id = tables.last_tournament_id;
        tables.tournaments.insert(id, tournament.clone());
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Tournament>, DatabaseError> {
        let tables = self.tables();
        match tables.tournaments.get(&id) {
            Some(tournament) => stitch_one(Self::tournament_rows(&tables, id, tournament)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Tournament>, DatabaseError> {
        let tables = self.tables();
        let rows: Vec<TournamentRow> = tables
            .tournaments
            .iter()
            .flat_map(|(id, tournament)| Self::tournament_rows(&tables, *id, tournament))
            .collect();
        Ok(stitch(rows))
    }

    async fn update(&self, id: i32, tournament: &TournamentInput) -> Result<Option<Tournament>, DatabaseError> {
        {
            let mut tables = self.tables();
            if !tables.tournaments.contains_key(&id) {
                return Ok(None);
            }
            if tables.tournaments.iter().any(|(other, t)| *other != id && t == tournament) {
                return Err(unique("tournaments_name_format_key"));
            }
            tables.tournaments.insert(id, tournament.clone());
        }
        TournamentRepository::get_by_id(self, id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let mut tables = self.tables();
        if tables.participation.keys().any(|key| key.tournament_id == id) {
            return Err(foreign_key("tournament_participation_tournament_fkey"));
        }
        Ok(tables.tournaments.remove(&id).is_some())
    }

    async fn find_id_by_name_and_format(&self, name: &str, format: &str) -> Result<Option<i32>, DatabaseError> {
        self.before_lookup().await?;
        let tables = self.tables();
        Ok(tables
            .tournaments
            .iter()
            .find(|(_, t)| t.name == name && t.format == format)
            .map(|(id, _)| *id))
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        self.before_lookup().await?;
        Ok(self.tables().tournaments.contains_key(&id))
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryStore {
    async fn create(&self, participation: &TournamentParticipation) -> Result<ParticipationKey, DatabaseError> {
        self.before_write().await;
        let mut tables = self.tables();
        let key = participation.key();
        if tables.participation.contains_key(&key) {
            return Err(unique("tournament_participation_pkey"));
        }
        if !tables.golfers.contains_key(&key.golfer_id) {
            return Err(foreign_key("tournament_participation_golfer_fkey"));
        }
        if !tables.tournaments.contains_key(&key.tournament_id) {
            return Err(foreign_key("tournament_participation_tournament_fkey"));
        }
        tables.participation.insert(key, participation.score);
        Ok(key)
    }

    async fn get(&self, key: ParticipationKey) -> Result<Option<TournamentParticipation>, DatabaseError> {
        self.before_lookup().await?;
        let tables = self.tables();
        Ok(tables.participation.get(&key).map(|score| TournamentParticipation {
            golfer_id: key.golfer_id,
            tournament_id: key.tournament_id,
            year: key.year,
            score: *score,
        }))
    }

    async fn update_score(
        &self,
        key: ParticipationKey,
        score: Option<i32>,
    ) -> Result<Option<TournamentParticipation>, DatabaseError> {
        let mut tables = self.tables();
        Ok(tables.participation.get_mut(&key).map(|stored| {
            *stored = score;
            TournamentParticipation {
                golfer_id: key.golfer_id,
                tournament_id: key.tournament_id,
                year: key.year,
                score,
            }
        }))
    }

    async fn delete(&self, key: ParticipationKey) -> Result<bool, DatabaseError> {
        Ok(self.tables().participation.remove(&key).is_some())
    }
}

#[async_trait]
impl MemberTypeRepository for InMemoryStore {
    async fn create(&self, member_type: &MemberTypeInput) -> Result<i32, DatabaseError> {
        self.before_write().await;
        let mut tables = self.tables();
        if tables.member_types.values().any(|t| t.name == member_type.name) {
            return Err(unique("member_types_name_key"));
        }
        tables.last_member_type_id += 1;
        let id = tables.last_member_type_id;
        tables.member_types.insert(id, member_type.clone());
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<MemberType>, DatabaseError> {
        let tables = self.tables();
        Ok(tables.member_types.get(&id).map(|t| MemberType {
            id,
            name: t.name.clone(),
            fee: t.fee,
        }))
    }

    async fn get_all(&self) -> Result<Vec<MemberType>, DatabaseError> {
        let tables = self.tables();
        Ok(tables
            .member_types
            .iter()
            .map(|(id, t)| MemberType {
                id: *id,
                name: t.name.clone(),
                fee: t.fee,
            })
            .collect())
    }

    async fn update(&self, id: i32, member_type: &MemberTypeInput) -> Result<Option<MemberType>, DatabaseError> {
        {
            let mut tables = self.tables();
            if !tables.member_types.contains_key(&id) {
                return Ok(None);
            }
            if tables
                .member_types
                .iter()
                .any(|(other, t)| *other != id && t.name == member_type.name)
            {
                return Err(unique("member_types_name_key"));
            }
            tables.member_types.insert(id, member_type.clone());
        }
        MemberTypeRepository::get_by_id(self, id).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let mut tables = self.tables();
        if tables.members.values().any(|m| m.member_type_id == id) {
            return Err(foreign_key("members_member_type_fkey"));
        }
        Ok(tables.member_types.remove(&id).is_some())
    }

    async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DatabaseError> {
        self.before_lookup().await?;
        let tables = self.tables();
        Ok(tables
            .member_types
            .iter()
            .find(|(_, t)| t.name == name)
            .map(|(id, _)| *id))
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn create(&self, member: &MemberInput) -> Result<i32, DatabaseError> {
        self.before_write().await;
        let mut tables = self.tables();
        if !tables.member_types.contains_key(&member.member_type_id) {
            return Err(foreign_key("members_member_type_fkey"));
        }
        tables.last_member_id += 1;
        let id = tables.last_member_id;
        tables.members.insert(id, member.clone());
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DatabaseError> {
        let tables = self.tables();
        Ok(tables
            .members
            .get(&id)
            .map(|member| Self::member_view(&tables, id, member)))
    }

    async fn get_all(&self) -> Result<Vec<Member>, DatabaseError> {
        let tables = self.tables();
        Ok(tables
            .members
            .iter()
            .map(|(id, member)| Self::member_view(&tables, *id, member))
            .collect())
    }

    async fn update(&self, id: i32, member: &MemberInput) -> Result<Option<Member>, DatabaseError> {
        let mut tables = self.tables();
        if !tables.members.contains_key(&id) {
            return Ok(None);
        }
        if !tables.member_types.contains_key(&member.member_type_id) {
            return Err(foreign_key("members_member_type_fkey"));
        }
        tables.members.insert(id, member.clone());
        Ok(Some(Self::member_view(&tables, id, member)))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        Ok(self.tables().members.remove(&id).is_some())
    }
}

#[async_trait]
impl HealthProbe for InMemoryStore {
    async fn check(&self) -> Result<(), DatabaseError> {
        if self.settings().healthy {
            Ok(())
        } else {
            Err(DatabaseError::Unavailable("store marked unhealthy".to_string()))
        }
    }
}
