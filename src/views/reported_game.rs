use crate::data_types::ReportType;
use crate::models::{Game, ReportedGame};
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema)]
#[serde(rename = "ReportedGame")]
pub struct ReportedGameView {
  pub id: Uuid,
  pub game_id: Uuid,
  pub game_title: String,
  pub report_member_id: Uuid,
  pub reported_member_id: Uuid,
  pub report_type: ReportType,
  pub created_at: chrono::NaiveDateTime,
}

impl ReportedGameView {
  pub fn new(reported_game: ReportedGame, game: &Game) -> Self {
    ReportedGameView {
      id: reported_game.id,
      game_id: reported_game.game_id,
      game_title: game.title.clone(),
      report_member_id: reported_game.report_member_id,
      reported_member_id: reported_game.reported_member_id,
      report_type: reported_game.report_type,
      created_at: reported_game.created_at,
    }
  }
}
