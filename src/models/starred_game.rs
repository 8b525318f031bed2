use crate::schema::starred_games;
use derive_builder::Builder;
use diesel::dsl::{And, Eq, Filter, Find};
use diesel::helper_types::{Desc, EqAny, Order};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "StarredGameChangeset"
)]
#[builder_struct_attr(diesel(table_name = starred_games))]
pub struct StarredGame {
  pub id: Uuid,
  pub member_id: Uuid,
  pub game_id: Uuid,
  pub created_at: chrono::NaiveDateTime,
}

#[allow(clippy::type_complexity)]
impl StarredGame {
  pub fn find_by_id(id: &Uuid) -> Find<starred_games::table, Uuid> {
    starred_games::table.find(*id)
  }

  pub fn find_by_member_and_game(
    member_id: &Uuid,
    game_id: &Uuid,
  ) -> Filter<
    starred_games::table,
    And<Eq<starred_games::member_id, Uuid>, Eq<starred_games::game_id, Uuid>>,
  > {
    starred_games::table.filter(
      starred_games::member_id
        .eq(*member_id)
        .and(starred_games::game_id.eq(*game_id)),
    )
  }

  pub fn filter_by_member_id(
    member_id: &Uuid,
  ) -> Order<
    Filter<starred_games::table, Eq<starred_games::member_id, Uuid>>,
    Desc<starred_games::created_at>,
  > {
    starred_games::table
      .filter(starred_games::member_id.eq(*member_id))
      .order(starred_games::created_at.desc())
  }

  pub fn filter_by_game_id(
    game_id: &Uuid,
  ) -> Filter<starred_games::table, Eq<starred_games::game_id, Uuid>> {
    starred_games::table.filter(starred_games::game_id.eq(*game_id))
  }

  pub fn filter_by_member_and_game_ids(
    member_id: &Uuid,
    game_ids: Vec<Uuid>,
  ) -> Filter<
    starred_games::table,
    And<Eq<starred_games::member_id, Uuid>, EqAny<starred_games::game_id, Vec<Uuid>>>,
  > {
    starred_games::table.filter(
      starred_games::member_id
        .eq(*member_id)
        .and(starred_games::game_id.eq_any(game_ids)),
    )
  }
}
