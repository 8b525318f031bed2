use crate::models::{Game, StarredGame};
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema)]
#[serde(rename = "StarredGame")]
pub struct StarredGameView {
  pub id: Uuid,
  pub game_id: Uuid,
  pub title: String,
  pub description: String,
  pub thumbnail_key: String,
  pub starred_count: i32,
  pub created_at: chrono::NaiveDateTime,
}

impl StarredGameView {
  pub fn new(starred_game: StarredGame, game: &Game) -> Self {
    StarredGameView {
      id: starred_game.id,
      game_id: starred_game.game_id,
      title: game.title.clone(),
      description: game.description.clone(),
      thumbnail_key: game.thumbnail_key.clone(),
      starred_count: game.starred_count,
      created_at: starred_game.created_at,
    }
  }
}
