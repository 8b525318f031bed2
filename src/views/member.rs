use crate::data_types::MemberRole;
use crate::models::Member;
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema)]
#[serde(rename = "Member")]
pub struct MemberView {
  pub id: Uuid,
  pub email: String,
  pub nickname: String,
  pub role: MemberRole,
  pub created_at: chrono::NaiveDateTime,
}

impl From<Member> for MemberView {
  fn from(member: Member) -> Self {
    MemberView {
      id: member.id,
      email: member.email,
      nickname: member.nickname,
      role: member.role,
      created_at: member.created_at,
    }
  }
}
