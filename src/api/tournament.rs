use serde::{Deserialize, Serialize};

use crate::database::models::{ParticipationDetail, Tournament, TournamentInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentRequest {
    pub name: String,
    pub format: String,
}

impl TournamentRequest {
    pub fn to_input(&self) -> TournamentInput {
        TournamentInput {
            name: self.name.trim().to_string(),
            format: self.format.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournamentRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(flatten)]
    pub tournament: TournamentRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: i32,
    pub name: String,
    pub format: String,
    pub participants: Vec<ParticipantResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub golfer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub year: i32,
    pub score: Option<i32>,
}

impl TournamentResponse {
    pub fn created(id: i32, input: TournamentInput) -> Self {
        Self {
            id,
            name: input.name,
            format: input.format,
            participants: Vec::new(),
        }
    }
}

impl From<Tournament> for TournamentResponse {
    fn from(tournament: Tournament) -> Self {
        Self {
            id: tournament.id,
            name: tournament.name,
            format: tournament.format,
            participants: tournament.participants.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ParticipationDetail> for ParticipantResponse {
    fn from(detail: ParticipationDetail) -> Self {
        Self {
            golfer_id: detail.golfer_id,
            first_name: detail.first_name,
            last_name: detail.last_name,
            year: detail.year,
            score: detail.score,
        }
    }
}
