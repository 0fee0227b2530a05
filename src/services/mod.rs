//! One service per aggregate: validate, make a single repository call, map the
//! result to a response shape.
//!
//! Not-found is `Ok(None)` (or `Ok(false)` for deletes), never an error.

pub mod golfer_service;
pub mod member_service;
pub mod member_type_service;
pub mod participation_service;
pub mod tournament_service;

pub use golfer_service::GolferService;
pub use member_service::MemberService;
pub use member_type_service::MemberTypeService;
pub use participation_service::ParticipationService;
pub use tournament_service::TournamentService;

use thiserror::Error;

use crate::database::manager::DatabaseError;
use crate::validation::golfer::DUPLICATE_EMAIL;
use crate::validation::member_type::DUPLICATE_NAME;
use crate::validation::participation::DUPLICATE_PARTICIPATION;
use crate::validation::tournament::DUPLICATE_TOURNAMENT;
use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Request failed validation")]
    Validation(ValidationErrors),

    #[error("Route id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Map an insert/update failure. A unique violation here means a
    /// concurrent writer won after validation passed; report it the way the
    /// validator would have.
    pub fn from_write(err: DatabaseError) -> Self {
        let field = match err.unique_constraint() {
            Some("golfers_email_key") => Some(("Email", DUPLICATE_EMAIL)),
            Some("tournaments_name_format_key") => Some(("Name", DUPLICATE_TOURNAMENT)),
            Some("tournament_participation_pkey") => Some(("Year", DUPLICATE_PARTICIPATION)),
            Some("member_types_name_key") => Some(("Name", DUPLICATE_NAME)),
            _ => None,
        };
        match field {
            Some((field, message)) => ServiceError::Validation(ValidationErrors::single(field, message)),
            None => ServiceError::Database(err),
        }
    }
}

pub(crate) fn ensure_valid(errors: ValidationErrors) -> ServiceResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}

pub(crate) fn ensure_same_id(path_id: i32, body_id: i32) -> ServiceResult<()> {
    if path_id == body_id {
        Ok(())
    } else {
        Err(ServiceError::IdMismatch { path_id, body_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_becomes_field_error() {
        let err = ServiceError::from_write(DatabaseError::UniqueViolation {
            constraint: "golfers_email_key".into(),
        });
        match err {
            ServiceError::Validation(errors) => assert_eq!(errors.get("Email").unwrap(), [DUPLICATE_EMAIL]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn other_constraints_stay_database_errors() {
        let err = ServiceError::from_write(DatabaseError::ForeignKeyViolation {
            constraint: "members_member_type_fkey".into(),
        });
        assert!(matches!(err, ServiceError::Database(DatabaseError::ForeignKeyViolation { .. })));

        let err = ServiceError::from_write(DatabaseError::UniqueViolation {
            constraint: "something_else".into(),
        });
        assert!(matches!(err, ServiceError::Database(_)));
    }

    #[test]
    fn id_guard() {
        assert!(ensure_same_id(3, 3).is_ok());
        assert!(matches!(
            ensure_same_id(3, 4),
            Err(ServiceError::IdMismatch { path_id: 3, body_id: 4 })
        ));
    }
}
