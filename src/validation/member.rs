use std::sync::Arc;

use crate::api::MemberRequest;
use crate::database::manager::DatabaseError;
use crate::database::repository::MemberTypeRepository;
use crate::validation::rules::{self, EMAIL_MAX_LENGTH, NAME_MAX_LENGTH};
use crate::validation::{ValidationErrors, Validator};

pub struct MemberValidator {
    member_types: Arc<dyn MemberTypeRepository>,
}

impl MemberValidator {
    pub fn new(member_types: Arc<dyn MemberTypeRepository>) -> Self {
        Self { member_types }
    }

    pub async fn validate(&self, request: &MemberRequest) -> Result<ValidationErrors, DatabaseError> {
        let mut v = Validator::new();

        v.check("FirstName", rules::not_empty("First Name", &request.first_name))
            .check("FirstName", rules::max_length("First Name", request.first_name.trim(), NAME_MAX_LENGTH))
            .check("LastName", rules::not_empty("Last Name", &request.last_name))
            .check("LastName", rules::max_length("Last Name", request.last_name.trim(), NAME_MAX_LENGTH))
            .check("Email", rules::not_empty("Email", &request.email))
            .check("Email", rules::email_address("Email", &request.email))
            .check("Email", rules::max_length("Email", request.email.trim(), EMAIL_MAX_LENGTH))
            .check("MemberTypeId", rules::not_default("Member Type Id", request.member_type_id));

        let member_type_id = request.member_type_id;
        v.check_when("MemberTypeId", &["MemberTypeId"], || async {
            let found = self.member_types.get_by_id(member_type_id).await?;
            Ok(found
                .is_none()
                .then(|| format!("Member type with Id {} does not exist.", member_type_id)))
        })
        .await?;

        Ok(v.finish())
    }
}
