use crate::data_types::MemberRole;
use crate::models::Game;
use crate::schema::members;
use derive_builder::Builder;
use diesel::dsl::{Find, FindBy};
use diesel::helper_types::{EqAny, Filter};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "MemberChangeset"
)]
#[builder_struct_attr(diesel(table_name = members))]
pub struct Member {
  pub id: Uuid,
  pub email: String,
  pub nickname: String,
  pub password: String,
  pub role: MemberRole,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl Member {
  pub fn find_by_id(id: &Uuid) -> Find<members::table, Uuid> {
    members::table.find(*id)
  }

  pub fn find_by_email(email: &str) -> FindBy<members::table, members::email, String> {
    members::table.filter(members::email.eq(email.to_string()))
  }

  pub fn filter_by_ids(ids: Vec<Uuid>) -> Filter<members::table, EqAny<members::id, Vec<Uuid>>> {
    members::table.filter(members::id.eq_any(ids))
  }

  pub fn can_manage(&self, game: &Game) -> bool {
    self.role == MemberRole::Admin || self.id == game.member_id
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn member(role: MemberRole) -> Member {
    Member {
      id: Uuid::new_v4(),
      email: "member@example.com".to_string(),
      nickname: "member".to_string(),
      password: "hash".to_string(),
      role,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    }
  }

  fn game_owned_by(member_id: Uuid) -> Game {
    Game {
      id: Uuid::new_v4(),
      member_id,
      title: "Quiz A".to_string(),
      description: "d".to_string(),
      thumbnail_key: "games/thumb.jpg".to_string(),
      starred_count: 0,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    }
  }

  #[test]
  fn owner_can_manage_own_game() {
    let owner = member(MemberRole::User);
    let game = game_owned_by(owner.id);

    assert!(owner.can_manage(&game));
  }

  #[test]
  fn admin_can_manage_any_game() {
    let admin = member(MemberRole::Admin);
    let game = game_owned_by(Uuid::new_v4());

    assert!(admin.can_manage(&game));
  }

  #[test]
  fn other_members_cannot_manage() {
    let other = member(MemberRole::User);
    let game = game_owned_by(Uuid::new_v4());

    assert!(!other.can_manage(&game));
  }
}
