use serde::{Deserialize, Serialize};

use crate::database::models::TournamentParticipation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateParticipationRequest {
    pub golfer_id: i32,
    pub tournament_id: i32,
    pub year: i32,
    pub score: Option<i32>,
}

impl CreateParticipationRequest {
    pub fn to_model(&self) -> TournamentParticipation {
        TournamentParticipation {
            golfer_id: self.golfer_id,
            tournament_id: self.tournament_id,
            year: self.year,
            score: self.score,
        }
    }
}

/// Body of `POST /api/golfers/{id}/tournamentparticipation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GolferParticipationRequest {
    pub tournament_id: i32,
    pub year: i32,
    pub score: Option<i32>,
}

impl GolferParticipationRequest {
    pub fn for_golfer(self, golfer_id: i32) -> CreateParticipationRequest {
        CreateParticipationRequest {
            golfer_id,
            tournament_id: self.tournament_id,
            year: self.year,
            score: self.score,
        }
    }
}

/// Body of `POST /api/tournaments/{id}/tournamentparticipation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentEntryRequest {
    pub golfer_id: i32,
    pub year: i32,
    pub score: Option<i32>,
}

impl TournamentEntryRequest {
    pub fn for_tournament(self, tournament_id: i32) -> CreateParticipationRequest {
        CreateParticipationRequest {
            golfer_id: self.golfer_id,
            tournament_id,
            year: self.year,
            score: self.score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateParticipationRequest {
    pub score: Option<i32>,
}

/// `?golferId=&tournamentId=&year=` identifying one participation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationQuery {
    pub golfer_id: Option<i32>,
    pub tournament_id: Option<i32>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationResponse {
    pub golfer_id: i32,
    pub tournament_id: i32,
    pub year: i32,
    pub score: Option<i32>,
}

impl ParticipationResponse {
    /// Relative URL identifying this record
    pub fn location(&self) -> String {
        format!(
            "/api/tournamentparticipation?golferId={}&tournamentId={}&year={}",
            self.golfer_id, self.tournament_id, self.year
        )
    }
}

impl From<TournamentParticipation> for ParticipationResponse {
    fn from(participation: TournamentParticipation) -> Self {
        Self {
            golfer_id: participation.golfer_id,
            tournament_id: participation.tournament_id,
            year: participation.year,
            score: participation.score,
        }
    }
}
