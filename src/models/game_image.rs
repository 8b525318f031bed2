use crate::schema::game_images;
use derive_builder::Builder;
use diesel::dsl::{And, Eq, Filter, Find};
use diesel::helper_types::{Asc, Order};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "GameImageChangeset"
)]
#[builder_struct_attr(diesel(table_name = game_images))]
pub struct GameImage {
  pub id: Uuid,
  pub game_id: Uuid,
  pub image_key: String,
  pub description: String,
  pub position: i32,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

#[allow(clippy::type_complexity)]
impl GameImage {
  pub fn find_by_id(id: &Uuid) -> Find<game_images::table, Uuid> {
    game_images::table.find(*id)
  }

  pub fn find_for_game(
    id: &Uuid,
    game_id: &Uuid,
  ) -> Filter<
    game_images::table,
    And<Eq<game_images::id, Uuid>, Eq<game_images::game_id, Uuid>>,
  > {
    game_images::table.filter(
      game_images::id
        .eq(*id)
        .and(game_images::game_id.eq(*game_id)),
    )
  }

  pub fn filter_by_game_id(
    game_id: &Uuid,
  ) -> Filter<game_images::table, Eq<game_images::game_id, Uuid>> {
    game_images::table.filter(game_images::game_id.eq(*game_id))
  }

  pub fn in_position_order(
    game_id: &Uuid,
  ) -> Order<
    Filter<game_images::table, Eq<game_images::game_id, Uuid>>,
    Asc<game_images::position>,
  > {
    Self::filter_by_game_id(game_id).order(game_images::position.asc())
  }
}
