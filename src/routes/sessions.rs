use crate::config::Config;
use crate::guards::auth::jwt::Claims;
use crate::guards::DbConn;
use crate::models::Member;
use crate::response::{MutationError, MutationResponse, Response};
use bcrypt::verify;
use chrono::{Duration, Utc};
use diesel::prelude::*;
use jsonwebtoken::{encode, EncodingKey, Header};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, JsonSchema)]
pub struct CreateSessionRequest {
  email: String,
  password: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CreateSessionResponse {
  pub token: String,
}

pub fn generate_token(member: &Member, config: &Config) -> String {
  let now = Utc::now();
  let exp = (now + Duration::hours(24)).timestamp() as usize;

  let claims = Claims {
    sub: format!("member:{}", member.id),
    exp,
    iss: config.host.clone(),
  };

  let key = EncodingKey::from_secret(config.auth_client_secret.as_ref());
  encode(&Header::default(), &claims, &key).expect("failed to encode token")
}

#[openapi(tag = "Gameshare")]
#[post("/sessions", data = "<session>")]
pub async fn create(
  session: Json<CreateSessionRequest>,
  config: &State<Config>,
  db_conn: DbConn,
) -> MutationResponse<CreateSessionResponse> {
  let session_password = session.password.clone();

  let member: Member = db_conn
    .run(move |conn| Member::find_by_email(&session.email).first::<Member>(conn))
    .await?;

  let is_valid = verify(session_password, &member.password)
    .map_err(|error| MutationError::InternalServerError(error.into()))?;

  if !is_valid {
    return Response::mutation_error(Status::Unauthorized);
  }

  let token = generate_token(&member, config);

  Response::success(CreateSessionResponse { token })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data_types::MemberRole;
  use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
  use uuid::Uuid;

  fn test_config() -> Config {
    Config {
      auth_client_secret: "secret".to_string(),
      host: "http://localhost:8000".to_string(),
      s3_bucket: "gameshare-test".to_string(),
      aws_access_key_id: String::new(),
      aws_secret_key: String::new(),
      sentry_dsn: None,
    }
  }

  fn test_member() -> Member {
    Member {
      id: Uuid::new_v4(),
      email: "member@example.com".to_string(),
      nickname: "member".to_string(),
      password: "hash".to_string(),
      role: MemberRole::User,
      created_at: Utc::now().naive_utc(),
      updated_at: Utc::now().naive_utc(),
    }
  }

  #[test]
  fn issues_tokens_the_jwt_guard_accepts() {
    let config = test_config();
    let member = test_member();
    let token = generate_token(&member, &config);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.host.clone()]);

    let claims = decode::<Claims>(
      &token,
      &DecodingKey::from_secret(config.auth_client_secret.as_ref()),
      &validation,
    )
    .expect("token failed validation")
    .claims;

    assert_eq!(claims.sub, format!("member:{}", member.id));
    assert_eq!(claims.iss, config.host);
  }

  #[test]
  fn rejects_tokens_from_another_issuer() {
    let config = test_config();
    let member = test_member();
    let token = generate_token(&member, &config);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&["http://elsewhere.example.com"]);

    let result = decode::<Claims>(
      &token,
      &DecodingKey::from_secret(config.auth_client_secret.as_ref()),
      &validation,
    );

    assert!(result.is_err());
  }
}
