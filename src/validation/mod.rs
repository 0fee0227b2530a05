//! Request validation.
//!
//! Each request type has a validator made of an ordered list of rules. Pure
//! field rules live in [`rules`] and return `Some(message)` on failure;
//! repository-backed rules (existence, uniqueness) run through
//! [`Validator::check_when`], which skips them unless every prerequisite field
//! has passed so far. The runner collects all failures instead of stopping at
//! the first one.

pub mod golfer;
pub mod member;
pub mod member_type;
pub mod participation;
pub mod rules;
pub mod tournament;

pub use golfer::GolferValidator;
pub use member::MemberValidator;
pub use member_type::MemberTypeValidator;
pub use participation::ParticipationValidator;
pub use tournament::TournamentValidator;

use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;

use crate::database::manager::DatabaseError;

/// Field name → failure messages, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Rule runner accumulating failures for one request
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a synchronous rule
    pub fn check(&mut self, field: &str, failure: Option<String>) -> &mut Self {
        if let Some(message) = failure {
            self.errors.add(field, message);
        }
        self
    }

    /// Run an asynchronous rule only when none of `prerequisites` has failed
    pub async fn check_when<F, Fut>(
        &mut self,
        field: &str,
        prerequisites: &[&str],
        rule: F,
    ) -> Result<&mut Self, DatabaseError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<String>, DatabaseError>>,
    {
        if self.passed(prerequisites) {
            if let Some(message) = rule().await? {
                self.errors.add(field, message);
            }
        }
        Ok(self)
    }

    pub fn passed(&self, fields: &[&str]) -> bool {
        fields.iter().all(|field| !self.errors.has(field))
    }

    pub fn finish(self) -> ValidationErrors {
        self.errors
    }
}
