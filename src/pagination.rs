use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::{AstPass, Query, QueryFragment, QueryId};
use diesel::query_dsl::methods::LoadQuery;
use diesel::sql_types::BigInt;
use schemars::JsonSchema;
use serde::Serialize;

const DEFAULT_PER_PAGE: i64 = 10;

pub trait Paginate: Sized {
  fn paginate(self, page: i64) -> Paginated<Self>;
}

impl<T> Paginate for T {
  fn paginate(self, page: i64) -> Paginated<Self> {
    let page = page.max(1);

    Paginated {
      query: self,
      per_page: DEFAULT_PER_PAGE,
      page,
      offset: (page - 1) * DEFAULT_PER_PAGE,
    }
  }
}

#[derive(Debug, Clone, Copy, QueryId)]
pub struct Paginated<T> {
  query: T,
  page: i64,
  per_page: i64,
  offset: i64,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PaginatedResult<T> {
  pub records: Vec<T>,
  pub count: i64,
  pub page: i64,
  pub per_page: i64,
  pub total_pages: i64,
}

impl<T> PaginatedResult<T> {
  pub fn records<U>(self, records: Vec<U>) -> PaginatedResult<U> {
    PaginatedResult {
      records,
      count: self.count,
      page: self.page,
      per_page: self.per_page,
      total_pages: self.total_pages,
    }
  }
}

impl<T> Paginated<T> {
  pub fn per_page(self, per_page: i64) -> Self {
    Paginated {
      per_page,
      offset: (self.page - 1) * per_page,
      ..self
    }
  }

  pub fn load_and_count_pages<'a, U>(
    self,
    conn: &mut PgConnection,
  ) -> QueryResult<PaginatedResult<U>>
  where
    Self: LoadQuery<'a, PgConnection, (U, i64)>,
  {
    let page = self.page;
    let per_page = self.per_page;
    let results = self.load::<(U, i64)>(conn)?;
    let count = results.first().map(|record| record.1).unwrap_or(0);
    let records = results.into_iter().map(|record| record.0).collect();

    Ok(PaginatedResult {
      records,
      count,
      page,
      per_page,
      total_pages: total_pages(count, per_page),
    })
  }
}

fn total_pages(count: i64, per_page: i64) -> i64 {
  (count as f64 / per_page as f64).ceil() as i64
}

impl<T: Query> Query for Paginated<T> {
  type SqlType = (T::SqlType, BigInt);
}

impl<T> RunQueryDsl<PgConnection> for Paginated<T> {}

impl<T> QueryFragment<Pg> for Paginated<T>
where
  T: QueryFragment<Pg>,
{
  fn walk_ast<'b>(&'b self, mut out: AstPass<'_, 'b, Pg>) -> QueryResult<()> {
    out.push_sql("SELECT *, COUNT(*) OVER () FROM (");
    self.query.walk_ast(out.reborrow())?;
    out.push_sql(") t LIMIT ");
    out.push_bind_param::<BigInt, _>(&self.per_page)?;
    out.push_sql(" OFFSET ");
    out.push_bind_param::<BigInt, _>(&self.offset)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_total_pages_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
  }

  #[test]
  fn rewraps_records_and_keeps_page_metadata() {
    let result = PaginatedResult {
      records: vec![1, 2, 3],
      count: 23,
      page: 2,
      per_page: 10,
      total_pages: 3,
    };

    let rewrapped = result.records(vec!["a", "b", "c"]);

    assert_eq!(rewrapped.records, vec!["a", "b", "c"]);
    assert_eq!(rewrapped.count, 23);
    assert_eq!(rewrapped.page, 2);
    assert_eq!(rewrapped.total_pages, 3);
  }
}
