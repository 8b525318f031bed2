pub mod jwt;

pub use jwt::Jwt;

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket_okapi::{
  gen::OpenApiGenerator,
  request::{OpenApiFromRequest, RequestHeaderInput},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
  #[error("missing authorization header")]
  Missing,
  #[error("invalid token: {0}")]
  Invalid(String),
  #[error("{0} not found")]
  NotFound(String),
}

impl From<AuthError> for (Status, AuthError) {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::Missing | AuthError::Invalid(_) => (Status::Unauthorized, error),
      AuthError::NotFound(_) => (Status::NotFound, error),
    }
  }
}

#[async_trait]
pub trait AuthFromRequest: Sized {
  async fn from_request(req: &Request<'_>) -> Result<Self, AuthError>;
}

pub struct Auth<T>(pub T);

impl<T> Auth<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

#[async_trait]
impl<'r, T: AuthFromRequest + Send> FromRequest<'r> for Auth<T> {
  type Error = AuthError;

  async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
    match T::from_request(req).await {
      Ok(inner) => Outcome::Success(Auth(inner)),
      Err(error) => Outcome::Error(error.into()),
    }
  }
}

impl<'a, T: AuthFromRequest + Send> OpenApiFromRequest<'a> for Auth<T> {
  fn from_request_input(
    _gen: &mut OpenApiGenerator,
    _name: String,
    _required: bool,
  ) -> rocket_okapi::Result<RequestHeaderInput> {
    Ok(RequestHeaderInput::None)
  }
}
