use crate::models::{Game, Member};
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema)]
#[serde(rename = "Game")]
pub struct GameView {
  pub id: Uuid,
  pub member_id: Uuid,
  pub title: String,
  pub description: String,
  pub thumbnail_key: String,
  pub starred_count: i32,
  pub creator_nickname: Option<String>,
  pub is_starred: bool,
  pub created_at: chrono::NaiveDateTime,
}

impl From<Game> for GameView {
  fn from(game: Game) -> Self {
    Self::new(game, None, false)
  }
}

impl GameView {
  pub fn new(game: Game, member: Option<&Member>, is_starred: bool) -> Self {
    GameView {
      id: game.id,
      member_id: game.member_id,
      title: game.title,
      description: game.description,
      thumbnail_key: game.thumbnail_key,
      starred_count: game.starred_count,
      creator_nickname: member.map(|member| member.nickname.clone()),
      is_starred,
      created_at: game.created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data_types::MemberRole;
  use chrono::Utc;

  fn game() -> Game {
    Game {
      id: Uuid::new_v4(),
      member_id: Uuid::new_v4(),
      title: "Quiz A".to_string(),
      description: "d".to_string(),
      thumbnail_key: "games/thumb.jpg".to_string(),
      starred_count: 3,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    }
  }

  #[test]
  fn stitches_creator_and_starred_flag() {
    let game = game();

    let member = Member {
      id: game.member_id,
      email: "creator@example.com".to_string(),
      nickname: "creator".to_string(),
      password: "hash".to_string(),
      role: MemberRole::User,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    };

    let view = GameView::new(game.clone(), Some(&member), true);

    assert_eq!(view.id, game.id);
    assert_eq!(view.creator_nickname.as_deref(), Some("creator"));
    assert!(view.is_starred);
    assert_eq!(view.starred_count, 3);
  }

  #[test]
  fn defaults_to_anonymous_unstarred_view() {
    let view = GameView::from(game());

    assert_eq!(view.creator_nickname, None);
    assert!(!view.is_starred);
  }
}
