use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Composite identity of a participation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipationKey {
    pub golfer_id: i32,
    pub tournament_id: i32,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TournamentParticipation {
    pub golfer_id: i32,
    pub tournament_id: i32,
    pub year: i32,
    pub score: Option<i32>,
}

impl TournamentParticipation {
    pub fn key(&self) -> ParticipationKey {
        ParticipationKey {
            golfer_id: self.golfer_id,
            tournament_id: self.tournament_id,
            year: self.year,
        }
    }
}
