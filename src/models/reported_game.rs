use crate::data_types::ReportType;
use crate::schema::reported_games;
use derive_builder::Builder;
use diesel::dsl::{And, Eq, Filter};
use diesel::helper_types::{Desc, Order};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone)]
#[builder(
  derive(AsChangeset, Insertable),
  pattern = "owned",
  name = "ReportedGameChangeset"
)]
#[builder_struct_attr(diesel(table_name = reported_games))]
pub struct ReportedGame {
  pub id: Uuid,
  pub game_id: Uuid,
  pub report_member_id: Uuid,
  pub reported_member_id: Uuid,
  pub report_type: ReportType,
  pub created_at: chrono::NaiveDateTime,
}

#[allow(clippy::type_complexity)]
impl ReportedGame {
  pub fn all() -> Order<reported_games::table, Desc<reported_games::created_at>> {
    reported_games::table.order(reported_games::created_at.desc())
  }

  pub fn find_by_reporter_and_game(
    report_member_id: &Uuid,
    game_id: &Uuid,
  ) -> Filter<
    reported_games::table,
    And<Eq<reported_games::report_member_id, Uuid>, Eq<reported_games::game_id, Uuid>>,
  > {
    reported_games::table.filter(
      reported_games::report_member_id
        .eq(*report_member_id)
        .and(reported_games::game_id.eq(*game_id)),
    )
  }

  pub fn filter_by_game_id(
    game_id: &Uuid,
  ) -> Filter<reported_games::table, Eq<reported_games::game_id, Uuid>> {
    reported_games::table.filter(reported_games::game_id.eq(*game_id))
  }
}
