use okapi::openapi3::Responses;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{response, Request};
use rocket_okapi::{
  gen::OpenApiGenerator, response::OpenApiResponderInner, Result as OpenApiResult,
};
use schemars::JsonSchema;
use serde::Serialize;
use validator::ValidationErrors;

fn add_error_response(responses: &mut Responses, status: &str, description: &str) {
  responses
    .responses
    .entry(status.to_owned())
    .or_insert_with(|| {
      let response = okapi::openapi3::Response {
        description: description.to_owned(),
        ..Default::default()
      };
      response.into()
    });
}

pub enum MutationError {
  Status(Status),
  ValidationErrors(ValidationErrors),
  InternalServerError(anyhow::Error),
}

pub enum QueryError {
  Status(Status),
  InternalServerError(anyhow::Error),
}

pub type MutationResponse<T> = Result<Json<T>, MutationError>;
pub type QueryResponse<T> = Result<Json<T>, QueryError>;

#[derive(Serialize, JsonSchema)]
pub struct StatusResponse {
  pub status: String,
}

pub struct Response;

impl Response {
  pub fn success<T, E>(response: T) -> Result<Json<T>, E> {
    Ok(Json(response))
  }

  pub fn status<E>(status: Status) -> Result<Json<StatusResponse>, E> {
    Ok(Json(StatusResponse {
      status: status.to_string(),
    }))
  }

  pub fn query_error<T>(status: Status) -> Result<Json<T>, QueryError> {
    Err(QueryError::Status(status))
  }

  pub fn validation_error<T>(errors: ValidationErrors) -> Result<Json<T>, MutationError> {
    Err(MutationError::ValidationErrors(errors))
  }

  pub fn mutation_error<T>(status: Status) -> Result<Json<T>, MutationError> {
    Err(MutationError::Status(status))
  }
}

impl<'r> Responder<'r, 'static> for MutationError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    match self {
      MutationError::Status(status) => status.respond_to(req),
      MutationError::ValidationErrors(errors) => {
        Custom(Status::BadRequest, Json(errors)).respond_to(req)
      }
      MutationError::InternalServerError(error) => {
        sentry::integrations::anyhow::capture_anyhow(&error);
        Status::InternalServerError.respond_to(req)
      }
    }
  }
}

impl<'r> Responder<'r, 'static> for QueryError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    match self {
      QueryError::Status(status) => status.respond_to(req),
      QueryError::InternalServerError(error) => {
        sentry::integrations::anyhow::capture_anyhow(&error);
        Status::InternalServerError.respond_to(req)
      }
    }
  }
}

impl OpenApiResponderInner for MutationError {
  fn responses(_gen: &mut OpenApiGenerator) -> OpenApiResult<Responses> {
    let mut responses = Responses::default();
    add_error_response(
      &mut responses,
      "400",
      "# [400 Bad Request](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/400)",
    );
    add_error_response(
      &mut responses,
      "401",
      "# [401 Unauthorized](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/401)",
    );
    add_error_response(
      &mut responses,
      "404",
      "# [404 Not Found](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404)",
    );
    add_error_response(
      &mut responses,
      "413",
      "# [413 Payload Too Large](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/413)",
    );
    add_error_response(
      &mut responses,
      "414",
      "# [414 URI Too Long](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/414)",
    );
    add_error_response(
      &mut responses,
      "500",
      "# [500 Internal Server Error](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500)",
    );
    Ok(responses)
  }
}

impl OpenApiResponderInner for QueryError {
  fn responses(_gen: &mut OpenApiGenerator) -> OpenApiResult<Responses> {
    let mut responses = Responses::default();
    add_error_response(
      &mut responses,
      "401",
      "# [401 Unauthorized](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/401)",
    );
    add_error_response(
      &mut responses,
      "404",
      "# [404 Not Found](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404)",
    );
    add_error_response(
      &mut responses,
      "500",
      "# [500 Internal Server Error](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500)",
    );
    Ok(responses)
  }
}

impl From<diesel::result::Error> for MutationError {
  fn from(error: diesel::result::Error) -> Self {
    match error {
      diesel::result::Error::NotFound => MutationError::Status(Status::NotFound),
      diesel::result::Error::DatabaseError(
        diesel::result::DatabaseErrorKind::UniqueViolation,
        _,
      ) => MutationError::Status(Status::BadRequest),
      error => MutationError::InternalServerError(error.into()),
    }
  }
}

impl From<diesel::result::Error> for QueryError {
  fn from(error: diesel::result::Error) -> Self {
    match error {
      diesel::result::Error::NotFound => QueryError::Status(Status::NotFound),
      error => QueryError::InternalServerError(error.into()),
    }
  }
}
