use diesel_derive_enum::DbEnum;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(DbEnum, Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, JsonSchema)]
#[ExistingTypePath = "crate::schema::sql_types::MemberRole"]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
  User,
  Admin,
}
