use crate::schema::games;
use derive_builder::Builder;
use diesel::dsl::Find;
use diesel::helper_types::{Desc, Eq, EqAny, Filter, Order};
use diesel::pg::Pg;
use diesel::prelude::*;
use schemars::JsonSchema;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "GameChangeset"
)]
#[builder_struct_attr(diesel(table_name = games))]
pub struct Game {
  pub id: Uuid,
  pub member_id: Uuid,
  pub title: String,
  pub description: String,
  pub thumbnail_key: String,
  pub starred_count: i32,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, FromFormField, JsonSchema)]
pub enum GameOrder {
  Latest,
  Popularity,
}

impl Game {
  pub fn find_by_id(id: &Uuid) -> Find<games::table, Uuid> {
    games::table.find(*id)
  }

  pub fn filter_by_ids(ids: Vec<Uuid>) -> Filter<games::table, EqAny<games::id, Vec<Uuid>>> {
    games::table.filter(games::id.eq_any(ids))
  }

  pub fn filter_by_member_id(
    member_id: &Uuid,
  ) -> Order<Filter<games::table, Eq<games::member_id, Uuid>>, Desc<games::created_at>> {
    games::table
      .filter(games::member_id.eq(*member_id))
      .order(games::created_at.desc())
  }

  pub fn search(search: Option<&str>, order: GameOrder) -> games::BoxedQuery<'static, Pg> {
    let mut query = games::table.into_boxed();

    if let Some(search) = search {
      query = query.filter(games::title.ilike(format!("%{}%", search)));
    }

    match order {
      GameOrder::Latest => query.order(games::created_at.desc()),
      GameOrder::Popularity => {
        query.order((games::starred_count.desc(), games::created_at.desc()))
      }
    }
  }
}
