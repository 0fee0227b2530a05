use std::sync::Arc;

use crate::auth::JwtKeys;
use crate::database::manager::HealthProbe;
use crate::database::repository::Repositories;
use crate::services::{GolferService, MemberService, MemberTypeService, ParticipationService, TournamentService};

/// Shared by every handler. Services are built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub golfers: Arc<GolferService>,
    pub tournaments: Arc<TournamentService>,
    pub participation: Arc<ParticipationService>,
    pub member_types: Arc<MemberTypeService>,
    pub members: Arc<MemberService>,
    pub health: Arc<dyn HealthProbe>,
    pub keys: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(repos: Repositories, health: Arc<dyn HealthProbe>, keys: JwtKeys) -> Self {
        Self {
            golfers: Arc::new(GolferService::new(&repos)),
            tournaments: Arc::new(TournamentService::new(&repos)),
            participation: Arc::new(ParticipationService::new(&repos)),
            member_types: Arc::new(MemberTypeService::new(&repos)),
            members: Arc::new(MemberService::new(&repos)),
            health,
            keys: Arc::new(keys),
        }
    }
}
