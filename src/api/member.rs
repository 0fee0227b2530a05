use serde::{Deserialize, Serialize};

use crate::database::models::{Member, MemberInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub member_type_id: i32,
}

impl MemberRequest {
    pub fn to_input(&self) -> MemberInput {
        MemberInput {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            member_type_id: self.member_type_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(flatten)]
    pub member: MemberRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub member_type_id: i32,
    /// Name of the member type
    pub member_type: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            member_type_id: member.member_type_id,
            member_type: member.member_type_name,
        }
    }
}
