// handlers/mod.rs - one module per resource
//
// Handlers only extract input, call the matching service and shape the HTTP
// response. Access policies are attached to the routes, not checked here.

pub mod golfers;
pub mod health;
pub mod member_types;
pub mod members;
pub mod participation;
pub mod tokens;
pub mod tournaments;

use crate::error::ApiError;

pub(crate) fn not_found(entity: &str, id: impl std::fmt::Display) -> ApiError {
    ApiError::not_found(format!("{} {} not found", entity, id))
}
