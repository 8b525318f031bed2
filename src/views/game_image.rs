use crate::models::GameImage;
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema)]
#[serde(rename = "GameImage")]
pub struct GameImageView {
  pub id: Uuid,
  pub image_key: String,
  pub description: String,
  pub position: i32,
}

impl From<GameImage> for GameImageView {
  fn from(game_image: GameImage) -> Self {
    GameImageView {
      id: game_image.id,
      image_key: game_image.image_key,
      description: game_image.description,
      position: game_image.position,
    }
  }
}
