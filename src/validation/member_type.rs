use std::sync::Arc;

use crate::api::MemberTypeRequest;
use crate::database::manager::DatabaseError;
use crate::database::repository::MemberTypeRepository;
use crate::validation::golfer::taken_by_other;
use crate::validation::rules::{self, MEMBER_TYPE_NAME_MAX_LENGTH};
use crate::validation::{ValidationErrors, Validator};

pub const DUPLICATE_NAME: &str = "This Name already exists in the system.";

pub struct MemberTypeValidator {
    member_types: Arc<dyn MemberTypeRepository>,
}

impl MemberTypeValidator {
    pub fn new(member_types: Arc<dyn MemberTypeRepository>) -> Self {
        Self { member_types }
    }

    pub async fn validate(
        &self,
        request: &MemberTypeRequest,
        existing_id: Option<i32>,
    ) -> Result<ValidationErrors, DatabaseError> {
        let mut v = Validator::new();

        v.check("Name", rules::not_empty("Name", &request.name))
            .check("Name", rules::max_length("Name", request.name.trim(), MEMBER_TYPE_NAME_MAX_LENGTH))
            .check("Fee", rules::not_negative("Fee", request.fee));

        let name = request.name.trim();
        v.check_when("Name", &["Name"], || async {
            let owner = self.member_types.find_id_by_name(name).await?;
            Ok(taken_by_other(owner, existing_id).then(|| DUPLICATE_NAME.to_string()))
        })
        .await?;

        Ok(v.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;
    use rust_decimal::Decimal;

    fn named(name: &str) -> MemberTypeRequest {
        MemberTypeRequest {
            name: name.into(),
            fee: Some(Decimal::new(15000, 2)),
        }
    }

    #[tokio::test]
    async fn negative_fee_rejected() {
        let store = InMemoryStore::new();
        let validator = MemberTypeValidator::new(store.repositories().member_types);
        let request = MemberTypeRequest {
            fee: Some(Decimal::new(-1, 0)),
            ..named("Junior")
        };
        let errors = validator.validate(&request, None).await.unwrap();
        assert_eq!(errors.get("Fee").unwrap(), ["'Fee' must be greater than or equal to '0'."]);
    }

    #[tokio::test]
    async fn name_uniqueness_excludes_self() {
        let store = InMemoryStore::new();
        let repos = store.repositories();
        let gold = repos.member_types.create(&named("Gold").to_input()).await.unwrap();
        let silver = repos.member_types.create(&named("Silver").to_input()).await.unwrap();
        let validator = MemberTypeValidator::new(repos.member_types);

        assert!(validator.validate(&named("Gold"), Some(gold)).await.unwrap().is_empty());
        assert_eq!(
            validator.validate(&named("Gold"), Some(silver)).await.unwrap().get("Name").unwrap(),
            [DUPLICATE_NAME]
        );
    }
}
