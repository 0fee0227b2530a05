use std::sync::Arc;

use crate::api::GolferRequest;
use crate::database::manager::DatabaseError;
use crate::database::repository::GolferRepository;
use crate::validation::rules::{self, EMAIL_MAX_LENGTH, HANDICAP_MAX, HANDICAP_MIN, NAME_MAX_LENGTH};
use crate::validation::{ValidationErrors, Validator};

pub const DUPLICATE_EMAIL: &str = "This Email already exists in the system.";

pub struct GolferValidator {
    golfers: Arc<dyn GolferRepository>,
}

impl GolferValidator {
    pub fn new(golfers: Arc<dyn GolferRepository>) -> Self {
        Self { golfers }
    }

    /// `existing_id` is the golfer being updated, excluded from the email check
    pub async fn validate(
        &self,
        request: &GolferRequest,
        existing_id: Option<i32>,
    ) -> Result<ValidationErrors, DatabaseError> {
        let mut v = Validator::new();

        v.check("FirstName", rules::not_empty("First Name", &request.first_name))
            .check("FirstName", rules::max_length("First Name", request.first_name.trim(), NAME_MAX_LENGTH))
            .check("LastName", rules::not_empty("Last Name", &request.last_name))
            .check("LastName", rules::max_length("Last Name", request.last_name.trim(), NAME_MAX_LENGTH))
            .check("Email", rules::not_empty("Email", &request.email))
            .check("Email", rules::email_address("Email", &request.email))
            .check("Email", rules::max_length("Email", request.email.trim(), EMAIL_MAX_LENGTH))
            .check("JoinDate", rules::date_not_default("Join Date", request.join_date))
            .check(
                "Handicap",
                rules::optional_between("Handicap", request.handicap, HANDICAP_MIN, HANDICAP_MAX),
            );

        let email = request.email.trim();
        v.check_when("Email", &["Email"], || async {
            let owner = self.golfers.find_id_by_email(email).await?;
            Ok(taken_by_other(owner, existing_id).then(|| DUPLICATE_EMAIL.to_string()))
        })
        .await?;

        Ok(v.finish())
    }
}

/// True when a unique value belongs to a record other than the one being saved
pub(crate) fn taken_by_other(owner: Option<i32>, existing_id: Option<i32>) -> bool {
    matches!(owner, Some(id) if Some(id) != existing_id)
}
