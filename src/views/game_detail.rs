use crate::models::{Game, GameImage, Member};
use crate::views::GameImageView;
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema)]
#[serde(rename = "GameDetail")]
pub struct GameDetailView {
  pub id: Uuid,
  pub member_id: Uuid,
  pub title: String,
  pub description: String,
  pub thumbnail_key: String,
  pub starred_count: i32,
  pub creator_nickname: String,
  pub images: Vec<GameImageView>,
  pub created_at: chrono::NaiveDateTime,
}

impl GameDetailView {
  pub fn new(game: Game, images: Vec<GameImage>, member: &Member) -> Self {
    GameDetailView {
      id: game.id,
      member_id: game.member_id,
      title: game.title,
      description: game.description,
      thumbnail_key: game.thumbnail_key,
      starred_count: game.starred_count,
      creator_nickname: member.nickname.clone(),
      images: images.into_iter().map(GameImageView::from).collect(),
      created_at: game.created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data_types::MemberRole;
  use chrono::Utc;

  #[test]
  fn keeps_images_in_given_order() {
    let game = Game {
      id: Uuid::new_v4(),
      member_id: Uuid::new_v4(),
      title: "Quiz A".to_string(),
      description: "d".to_string(),
      thumbnail_key: "games/first.jpg".to_string(),
      starred_count: 0,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    };

    let member = Member {
      id: game.member_id,
      email: "creator@example.com".to_string(),
      nickname: "creator".to_string(),
      password: "hash".to_string(),
      role: MemberRole::User,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    };

    let images = (0..2)
      .map(|position| GameImage {
        id: Uuid::new_v4(),
        game_id: game.id,
        image_key: format!("games/{}.jpg", position),
        description: format!("image {}", position),
        position,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
      })
      .collect::<Vec<_>>();

    let view = GameDetailView::new(game, images, &member);

    assert_eq!(view.images.len(), 2);
    assert_eq!(view.images[0].position, 0);
    assert_eq!(view.images[0].image_key, "games/0.jpg");
    assert_eq!(view.thumbnail_key, "games/first.jpg");
    assert_eq!(view.creator_nickname, "creator");
  }
}
