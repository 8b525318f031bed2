use crate::config::Config;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::request::{OpenApiFromRequest, RequestHeaderInput};
use rusoto_core::credential::{AwsCredentials, CredentialsError, ProvideAwsCredentials};
use rusoto_core::{HttpClient, Region};
use rusoto_s3::S3Client;

pub struct S3(pub S3Client);

struct CredentialsProvider {
  access_key_id: String,
  secret_key: String,
}

#[async_trait]
impl ProvideAwsCredentials for CredentialsProvider {
  async fn credentials(&self) -> Result<AwsCredentials, CredentialsError> {
    Ok(AwsCredentials::new(
      self.access_key_id.clone(),
      self.secret_key.clone(),
      None,
      None,
    ))
  }
}

#[async_trait]
impl<'r> FromRequest<'r> for S3 {
  type Error = ();

  async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
    let config = request.guard::<&State<Config>>().await.unwrap();

    let credentials = CredentialsProvider {
      access_key_id: config.aws_access_key_id.clone(),
      secret_key: config.aws_secret_key.clone(),
    };

    let client = S3Client::new_with(HttpClient::new().unwrap(), credentials, Region::EuWest2);

    Outcome::Success(S3(client))
  }
}

impl<'a> OpenApiFromRequest<'a> for S3 {
  fn from_request_input(
    _gen: &mut OpenApiGenerator,
    _name: String,
    _required: bool,
  ) -> rocket_okapi::Result<RequestHeaderInput> {
    Ok(RequestHeaderInput::None)
  }
}

impl S3 {
  pub fn into_inner(self) -> S3Client {
    self.0
  }
}
