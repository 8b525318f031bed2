#[macro_use]
extern crate rocket;

use dotenv::dotenv;
use gameshare_api::config::Config;
use gameshare_api::fairings::SentryFairing;
use gameshare_api::guards::db_conn::run_migrations;
use gameshare_api::guards::DbConn;
use gameshare_api::routes;
use rocket::fairing::AdHoc;
use rocket::figment::providers::Env;
use rocket::serde::{json::Json, Serialize};
use rocket::{Build, Rocket};
use rocket_okapi::{openapi, openapi_get_routes};

#[derive(Serialize)]
struct Health {
  status: String,
}

#[openapi(skip)]
#[get("/")]
async fn root() -> Json<Health> {
  Json(Health {
    status: "ok".into(),
  })
}

#[launch]
fn rocket() -> Rocket<Build> {
  dotenv().ok();

  let mut figment = rocket::Config::figment();

  if let Some(database_url) = Env::var("DATABASE_URL") {
    figment = figment.merge(("databases.default.url", database_url));
  }

  rocket::custom(figment)
    .attach(SentryFairing::fairing(Env::var("SENTRY_DSN")))
    .attach(DbConn::fairing())
    .attach(AdHoc::on_ignite("Run Migrations", run_migrations))
    .attach(AdHoc::config::<Config>())
    .mount(
      "/",
      openapi_get_routes![
        root,
        routes::games::list,
        routes::games::list_mine,
        routes::games::list_starred,
        routes::games::list_reported,
        routes::games::get,
        routes::games::create,
        routes::games::update,
        routes::games::delete,
        routes::games::star,
        routes::games::unstar,
        routes::games::report,
        routes::members::create,
        routes::sessions::create,
        routes::me::get_me,
      ],
    )
}
