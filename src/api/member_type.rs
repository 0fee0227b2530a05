use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::database::models::{MemberType, MemberTypeInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberTypeRequest {
    pub name: String,
    pub fee: Option<Decimal>,
}

impl MemberTypeRequest {
    pub fn to_input(&self) -> MemberTypeInput {
        MemberTypeInput {
            name: self.name.trim().to_string(),
            fee: self.fee,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberTypeRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(flatten)]
    pub member_type: MemberTypeRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTypeResponse {
    pub id: i32,
    pub name: String,
    pub fee: Option<Decimal>,
}

impl From<MemberType> for MemberTypeResponse {
    fn from(member_type: MemberType) -> Self {
        Self {
            id: member_type.id,
            name: member_type.name,
            fee: member_type.fee,
        }
    }
}
