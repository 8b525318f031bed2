use super::{Auth, AuthError, AuthFromRequest};
use crate::config::Config;
use crate::guards::DbConn;
use crate::models::Member;
use diesel::prelude::*;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use lazy_static::lazy_static;
use regex::Regex;
use rocket::{Request, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

lazy_static! {
  static ref JWT_REGEX: Regex = Regex::new(r"Bearer (?P<jwt>.*)").unwrap();
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Claims {
  pub sub: String,
  pub exp: usize,
  pub iss: String,
}

pub struct Jwt<T>(T);

impl<T> Jwt<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T> Auth<Jwt<T>> {
  pub fn into_deep_inner(self) -> T {
    self.into_inner().into_inner()
  }
}

#[async_trait]
pub trait FromJwt: Sized {
  async fn from_jwt(claims: &Claims, db_conn: &DbConn) -> Result<Self, AuthError>;
}

#[async_trait]
impl<T: FromJwt + Send> AuthFromRequest for Jwt<T> {
  async fn from_request(req: &Request<'_>) -> Result<Self, AuthError> {
    let config = req.guard::<&State<Config>>().await.unwrap();
    let db_conn = req.guard::<DbConn>().await.unwrap();

    let authorization = req
      .headers()
      .get_one("authorization")
      .ok_or(AuthError::Missing)?;

    let captures = JWT_REGEX
      .captures(authorization)
      .ok_or_else(|| AuthError::Invalid("malformed authorization header".to_string()))?;

    let jwt = captures
      .name("jwt")
      .ok_or_else(|| AuthError::Invalid("jwt not found in header".to_string()))?
      .as_str();

    let mut validation = Validation::new(Algorithm::HS256);

    validation.set_issuer(&[config.host.clone()]);

    let claims = decode::<Claims>(
      jwt,
      &DecodingKey::from_secret(config.auth_client_secret.as_ref()),
      &validation,
    )
    .map_err(|error| AuthError::Invalid(error.to_string()))?
    .claims;

    let inner = T::from_jwt(&claims, &db_conn).await?;

    Ok(Self(inner))
  }
}

#[async_trait]
impl FromJwt for Member {
  async fn from_jwt(claims: &Claims, db_conn: &DbConn) -> Result<Self, AuthError> {
    let uuid_str = claims.sub.replace("member:", "");
    let uuid =
      Uuid::parse_str(&uuid_str).map_err(|error| AuthError::Invalid(error.to_string()))?;

    let member = db_conn
      .run(move |conn| Member::find_by_id(&uuid).first(conn))
      .await
      .map_err(|_| AuthError::NotFound("member".to_string()))?;

    Ok(member)
  }
}
