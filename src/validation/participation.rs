use std::sync::Arc;

use crate::api::CreateParticipationRequest;
use crate::database::manager::DatabaseError;
use crate::database::models::ParticipationKey;
use crate::database::repository::{GolferRepository, ParticipationRepository, TournamentRepository};
use crate::validation::rules::{self, SCORE_MAX, SCORE_MIN};
use crate::validation::{ValidationErrors, Validator};

pub const DUPLICATE_PARTICIPATION: &str =
    "This golfer already has a participation record for this tournament and year.";

pub struct ParticipationValidator {
    golfers: Arc<dyn GolferRepository>,
    tournaments: Arc<dyn TournamentRepository>,
    participation: Arc<dyn ParticipationRepository>,
}

impl ParticipationValidator {
    pub fn new(
        golfers: Arc<dyn GolferRepository>,
        tournaments: Arc<dyn TournamentRepository>,
        participation: Arc<dyn ParticipationRepository>,
    ) -> Self {
        Self {
            golfers,
            tournaments,
            participation,
        }
    }

    pub async fn validate(&self, request: &CreateParticipationRequest) -> Result<ValidationErrors, DatabaseError> {
        let mut v = Validator::new();

        v.check("GolferId", rules::not_default("Golfer Id", request.golfer_id))
            .check("TournamentId", rules::not_default("Tournament Id", request.tournament_id))
            .check("Year", rules::not_default("Year", request.year))
            .check("Score", rules::optional_between("Score", request.score, SCORE_MIN, SCORE_MAX));
        if request.year != 0 {
            v.check("Year", rules::year("Year", request.year));
        }

        let golfer_id = request.golfer_id;
        v.check_when("GolferId", &["GolferId"], || async {
            let exists = self.golfers.exists(golfer_id).await?;
            Ok((!exists).then(|| format!("Golfer with Id {} does not exist.", golfer_id)))
        })
        .await?;

        let tournament_id = request.tournament_id;
        v.check_when("TournamentId", &["TournamentId"], || async {
            let exists = self.tournaments.exists(tournament_id).await?;
            Ok((!exists).then(|| format!("Tournament with Id {} does not exist.", tournament_id)))
        })
        .await?;

        // Composite key lookup only once every part of the key is known good
        let key = ParticipationKey {
            golfer_id,
            tournament_id,
            year: request.year,
        };
        v.check_when("Year", &["GolferId", "TournamentId", "Year"], || async {
            let existing = self.participation.get(key).await?;
            Ok(existing.map(|_| DUPLICATE_PARTICIPATION.to_string()))
        })
        .await?;

        Ok(v.finish())
    }

    /// Score is the only mutable field of a participation
    pub fn validate_score(score: Option<i32>) -> ValidationErrors {
        let mut v = Validator::new();
        v.check("Score", rules::optional_between("Score", score, SCORE_MIN, SCORE_MAX));
        v.finish()
    }
}
