use crate::data_types::MemberRole;
use crate::guards::DbConn;
use crate::models::{Member, MemberChangeset};
use crate::response::{MutationError, MutationResponse, Response};
use crate::schema::members;
use crate::views::MemberView;
use bcrypt::{hash, DEFAULT_COST};
use diesel::prelude::*;
use rocket::serde::json::Json;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, JsonSchema, Validate)]
pub struct CreateMemberRequest {
  #[validate(email)]
  email: String,
  #[validate(length(min = 8))]
  password: String,
  #[validate(length(min = 1, max = 30))]
  nickname: String,
}

#[openapi(tag = "Gameshare")]
#[post("/members", data = "<member_request>")]
pub async fn create(
  db_conn: DbConn,
  member_request: Json<CreateMemberRequest>,
) -> MutationResponse<MemberView> {
  if let Err(errors) = member_request.validate() {
    return Response::validation_error(errors);
  }

  let password = hash(member_request.password.clone(), DEFAULT_COST)
    .map_err(|error| MutationError::InternalServerError(error.into()))?;

  let member: Member = db_conn
    .run(move |conn| {
      diesel::insert_into(members::table)
        .values(
          MemberChangeset::default()
            .email(member_request.email.clone())
            .nickname(member_request.nickname.clone())
            .password(password)
            .role(MemberRole::User),
        )
        .get_result::<Member>(conn)
    })
    .await?;

  Response::success(MemberView::from(member))
}
