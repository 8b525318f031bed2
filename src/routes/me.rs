use crate::guards::{Auth, Jwt};
use crate::models::Member;
use crate::response::{QueryResponse, Response};
use crate::views::MemberView;
use rocket_okapi::openapi;

#[openapi(tag = "Gameshare")]
#[get("/me")]
pub async fn get_me(auth: Auth<Jwt<Member>>) -> QueryResponse<MemberView> {
  Response::success(MemberView::from(auth.into_deep_inner()))
}
