use std::sync::Arc;

use crate::api::TournamentRequest;
use crate::database::manager::DatabaseError;
use crate::database::models::TOURNAMENT_FORMATS;
use crate::database::repository::TournamentRepository;
use crate::validation::golfer::taken_by_other;
use crate::validation::rules::{self, NAME_MAX_LENGTH};
use crate::validation::{ValidationErrors, Validator};

pub const DUPLICATE_TOURNAMENT: &str = "A tournament with this Name and Format already exists in the system.";

pub struct TournamentValidator {
    tournaments: Arc<dyn TournamentRepository>,
}

impl TournamentValidator {
    pub fn new(tournaments: Arc<dyn TournamentRepository>) -> Self {
        Self { tournaments }
    }

    pub async fn validate(
        &self,
        request: &TournamentRequest,
        existing_id: Option<i32>,
    ) -> Result<ValidationErrors, DatabaseError> {
        let mut v = Validator::new();

        v.check("Name", rules::not_empty("Name", &request.name))
            .check("Name", rules::max_length("Name", request.name.trim(), NAME_MAX_LENGTH))
            .check("Format", rules::not_empty("Format", &request.format))
            .check("Format", rules::one_of("Format", &request.format, &TOURNAMENT_FORMATS));

        let name = request.name.trim();
        let format = request.format.as_str();
        v.check_when("Name", &["Name", "Format"], || async {
            let owner = self.tournaments.find_id_by_name_and_format(name, format).await?;
            Ok(taken_by_other(owner, existing_id).then(|| DUPLICATE_TOURNAMENT.to_string()))
        })
        .await?;

        Ok(v.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;

    fn spring_open(format: &str) -> TournamentRequest {
        TournamentRequest {
            name: "Spring Open".into(),
            format: format.into(),
        }
    }

    #[tokio::test]
    async fn unknown_format_lists_allowed_values() {
        let store = InMemoryStore::new();
        let validator = TournamentValidator::new(store.repositories().tournaments);
        let errors = validator.validate(&spring_open("Not A Real Format"), None).await.unwrap();

        let message = &errors.get("Format").unwrap()[0];
        assert!(message.contains("Stroke Play"));
        assert!(message.contains("Alternate Shot"));
    }

    #[tokio::test]
    async fn same_name_different_format_is_allowed() {
        let store = InMemoryStore::new();
        let repos = store.repositories();
        repos.tournaments.create(&spring_open("Stroke Play").to_input()).await.unwrap();
        let validator = TournamentValidator::new(repos.tournaments);

        assert!(validator.validate(&spring_open("Scramble"), None).await.unwrap().is_empty());
        assert_eq!(
            validator.validate(&spring_open("Stroke Play"), None).await.unwrap().get("Name").unwrap(),
            [DUPLICATE_TOURNAMENT]
        );
    }

    #[tokio::test]
    async fn update_to_own_name_and_format_passes() {
        let store = InMemoryStore::new();
        let repos = store.repositories();
        let id = repos.tournaments.create(&spring_open("Stableford").to_input()).await.unwrap();
        let validator = TournamentValidator::new(repos.tournaments);

        assert!(validator.validate(&spring_open("Stableford"), Some(id)).await.unwrap().is_empty());
    }
}
