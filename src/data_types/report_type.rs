use diesel_derive_enum::DbEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(DbEnum, Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[ExistingTypePath = "crate::schema::sql_types::ReportType"]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
  Spam,
  SexualContent,
  Violence,
  Harassment,
  Other,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_to_snake_case() {
    assert_eq!(
      serde_json::to_string(&ReportType::SexualContent).unwrap(),
      "\"sexual_content\""
    );

    assert_eq!(
      serde_json::from_str::<ReportType>("\"spam\"").unwrap(),
      ReportType::Spam
    );
  }

  #[test]
  fn rejects_unknown_report_types() {
    assert!(serde_json::from_str::<ReportType>("\"scam\"").is_err());
  }
}
