use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::stitch::JoinedRow;

/// Formats a tournament may be played in
pub const TOURNAMENT_FORMATS: [&str; 6] = [
    "Stroke Play",
    "Match Play",
    "Stableford",
    "Scramble",
    "Best Ball",
    "Alternate Shot",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentInput {
    pub name: String,
    pub format: String,
}

/// Tournament aggregate with everyone who played in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i32,
    pub name: String,
    pub format: String,
    pub participants: Vec<ParticipationDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationDetail {
    pub golfer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub year: i32,
    pub score: Option<i32>,
}

/// One row of tournament_get_by_id / tournament_get_all
#[derive(Debug, Clone, FromRow)]
pub struct TournamentRow {
    pub id: i32,
    pub name: String,
    pub format: String,
    pub golfer_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub year: Option<i32>,
    pub score: Option<i32>,
}

impl JoinedRow for TournamentRow {
    type Key = i32;
    type Parent = Tournament;
    type Child = ParticipationDetail;

    fn key(&self) -> i32 {
        self.id
    }

    fn parent(&self) -> Tournament {
        Tournament {
            id: self.id,
            name: self.name.clone(),
            format: self.format.clone(),
            participants: Vec::new(),
        }
    }

    fn child(self) -> Option<ParticipationDetail> {
        match (self.golfer_id, self.first_name, self.last_name, self.year) {
            (Some(golfer_id), Some(first_name), Some(last_name), Some(year)) => {
                Some(ParticipationDetail { golfer_id, first_name, last_name, year, score: self.score })
            }
            _ => None,
        }
    }

    fn attach(parent: &mut Tournament, child: ParticipationDetail) {
        parent.participants.push(child);
    }
}
