use rocket::fairing::{self, Fairing, Info, Kind};
use rocket::{Build, Rocket};
use sentry::ClientInitGuard;
use std::sync::Mutex;

pub struct SentryFairing {
  dsn: Option<String>,
  guard: Mutex<Option<ClientInitGuard>>,
}

impl SentryFairing {
  pub fn fairing(dsn: Option<String>) -> impl Fairing {
    Self {
      dsn,
      guard: Mutex::new(None),
    }
  }
}

#[rocket::async_trait]
impl Fairing for SentryFairing {
  fn info(&self) -> Info {
    Info {
      name: "sentry",
      kind: Kind::Ignite,
    }
  }

  async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
    if let Some(dsn) = self.dsn.as_deref().filter(|dsn| !dsn.is_empty()) {
      *self.guard.lock().unwrap() = Some(sentry::init(dsn));
    }

    Ok(rocket)
  }
}
