use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub member_type_id: i32,
}

/// Member joined with the name of its member type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub member_type_id: i32,
    pub member_type_name: String,
}
