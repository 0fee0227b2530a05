use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::stitch::JoinedRow;

/// Writable golfer columns, used for both create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GolferInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub handicap: Option<i32>,
}

/// Golfer aggregate with its tournament history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Golfer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub handicap: Option<i32>,
    pub tournaments: Vec<TournamentDetail>,
}

/// Read-only view of one participation from the golfer's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentDetail {
    pub tournament_id: i32,
    pub name: String,
    pub format: String,
    pub year: i32,
    pub score: Option<i32>,
}

/// One row of golfer_get_by_id / golfer_get_all
#[derive(Debug, Clone, FromRow)]
pub struct GolferRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub handicap: Option<i32>,
    pub tournament_id: Option<i32>,
    pub tournament_name: Option<String>,
    pub tournament_format: Option<String>,
    pub year: Option<i32>,
    pub score: Option<i32>,
}

impl JoinedRow for GolferRow {
    type Key = i32;
    type Parent = Golfer;
    type Child = TournamentDetail;

    fn key(&self) -> i32 {
        self.id
    }

    fn parent(&self) -> Golfer {
        Golfer {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            join_date: self.join_date,
            handicap: self.handicap,
            tournaments: Vec::new(),
        }
    }

    fn child(self) -> Option<TournamentDetail> {
        match (self.tournament_id, self.tournament_name, self.tournament_format, self.year) {
            (Some(tournament_id), Some(name), Some(format), Some(year)) => Some(TournamentDetail {
                tournament_id,
                name,
                format,
                year,
                score: self.score,
            }),
            _ => None,
        }
    }

    fn attach(parent: &mut Golfer, child: TournamentDetail) {
        parent.tournaments.push(child);
    }
}
