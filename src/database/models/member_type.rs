use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberTypeInput {
    pub name: String,
    pub fee: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MemberType {
    pub id: i32,
    pub name: String,
    pub fee: Option<Decimal>,
}
