use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::models::{Golfer, GolferInput, TournamentDetail};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GolferRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 1970-01-01 (the default) is treated as "not supplied"
    pub join_date: NaiveDate,
    pub handicap: Option<i32>,
}

impl GolferRequest {
    pub fn to_input(&self) -> GolferInput {
        GolferInput {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            join_date: self.join_date,
            handicap: self.handicap,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGolferRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(flatten)]
    pub golfer: GolferRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolferResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub handicap: Option<i32>,
    pub tournaments: Vec<TournamentDetailResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetailResponse {
    pub tournament_id: i32,
    pub name: String,
    pub format: String,
    pub year: i32,
    pub score: Option<i32>,
}

impl GolferResponse {
    /// Response for a freshly created golfer, who has no history yet
    pub fn created(id: i32, input: GolferInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            join_date: input.join_date,
            handicap: input.handicap,
            tournaments: Vec::new(),
        }
    }
}

impl From<Golfer> for GolferResponse {
    fn from(golfer: Golfer) -> Self {
        Self {
            id: golfer.id,
            first_name: golfer.first_name,
            last_name: golfer.last_name,
            email: golfer.email,
            join_date: golfer.join_date,
            handicap: golfer.handicap,
            tournaments: golfer.tournaments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TournamentDetail> for TournamentDetailResponse {
    fn from(detail: TournamentDetail) -> Self {
        Self {
            tournament_id: detail.tournament_id,
            name: detail.name,
            format: detail.format,
            year: detail.year,
            score: detail.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_empty() {
        let request: GolferRequest = serde_json::from_value(json!({"firstName": "Jane"})).unwrap();
        assert_eq!(request.first_name, "Jane");
        assert!(request.email.is_empty());
        assert_eq!(request.join_date, NaiveDate::default());
        assert_eq!(request.handicap, None);
    }

    #[test]
    fn update_request_flattens_golfer_fields() {
        let request: UpdateGolferRequest = serde_json::from_value(json!({
            "id": 4,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@x.com",
            "joinDate": "2020-01-01",
            "handicap": 12
        }))
        .unwrap();
        assert_eq!(request.id, 4);
        assert_eq!(request.golfer.handicap, Some(12));
        assert_eq!(request.golfer.join_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn response_uses_camel_case_and_empty_history() {
        let input = GolferRequest {
            first_name: " Jane ".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            handicap: Some(12),
        }
        .to_input();
        let value = serde_json::to_value(GolferResponse::created(9, input)).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["joinDate"], "2020-01-01");
        assert_eq!(value["tournaments"], json!([]));
    }
}
