use crate::config::Config;
use crate::data_types::{MemberRole, ReportType};
use crate::guards::{Auth, DbConn, Jwt, S3};
use crate::models::{
  Game, GameChangeset, GameImage, GameImageChangeset, GameOrder, Member, ReportedGame,
  ReportedGameChangeset, StarredGame, StarredGameChangeset,
};
use crate::pagination::{Paginate, PaginatedResult};
use crate::response::{MutationError, MutationResponse, QueryResponse, Response, StatusResponse};
use crate::schema::{game_images, games, reported_games, starred_games};
use crate::views::{GameDetailView, GameView, ReportedGameView, StarredGameView};
use diesel::dsl::exists;
use diesel::prelude::*;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::{ContentType, Status};
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use rusoto_s3::{PutObjectRequest, S3Client, S3 as RusotoS3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;
use validator::Validate;

#[derive(FromForm, JsonSchema)]
pub struct ListParams {
  page: Option<i64>,
  search: Option<String>,
  order: Option<GameOrder>,
}

#[derive(FromForm, Validate)]
pub struct CreateGameRequest<'r> {
  #[validate(length(min = 1, max = 50))]
  title: String,
  #[validate(length(min = 1, max = 200))]
  description: String,
  #[validate(length(min = 1))]
  images: Vec<GameImageParam<'r>>,
}

#[derive(FromForm, Serialize)]
pub struct GameImageParam<'r> {
  #[serde(skip)]
  image: TempFile<'r>,
  description: String,
}

#[derive(FromForm, Validate)]
pub struct UpdateGameRequest<'r> {
  #[validate(length(min = 1, max = 50))]
  title: String,
  #[validate(length(min = 1, max = 200))]
  description: String,
  images: Vec<UpdateGameImageParam<'r>>,
}

#[derive(FromForm)]
pub struct UpdateGameImageParam<'r> {
  id: Uuid,
  image: TempFile<'r>,
  description: String,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportGameRequest {
  report_type: ReportType,
}

fn image_key(content_type: Option<&ContentType>) -> Result<String, MutationError> {
  let content_type = content_type.ok_or(MutationError::Status(Status::UriTooLong))?;

  if *content_type != ContentType::JPEG && *content_type != ContentType::PNG {
    return Err(MutationError::Status(Status::UriTooLong));
  }

  let extensions = mime_guess::get_mime_extensions_str(&content_type.to_string())
    .ok_or(MutationError::Status(Status::UriTooLong))?;

  let extension = extensions.first().unwrap();

  Ok(format!("games/{}.{}", Uuid::new_v4(), extension))
}

async fn upload_image(
  s3: &S3Client,
  config: &Config,
  file: &mut TempFile<'_>,
) -> Result<String, MutationError> {
  let key = image_key(file.content_type())?;
  let content_type = file.content_type().map(|content_type| content_type.to_string());
  let path = std::env::temp_dir().join(Uuid::new_v4().to_string());

  file
    .copy_to(&path)
    .await
    .map_err(|error| MutationError::InternalServerError(error.into()))?;

  let contents = rocket::tokio::fs::read(&path)
    .await
    .map_err(|error| MutationError::InternalServerError(error.into()))?;

  let _ = rocket::tokio::fs::remove_file(&path).await;

  let request = PutObjectRequest {
    bucket: config.s3_bucket.to_owned(),
    key: key.clone(),
    body: Some(contents.into()),
    content_type,
    acl: Some("public-read".to_string()),
    ..Default::default()
  };

  s3.put_object(request)
    .await
    .map_err(|error| MutationError::InternalServerError(error.into()))?;

  Ok(key)
}

#[openapi(tag = "Gameshare")]
#[get("/games?<params..>")]
pub async fn list(
  db_conn: DbConn,
  viewer: Option<Auth<Jwt<Member>>>,
  params: ListParams,
) -> QueryResponse<PaginatedResult<GameView>> {
  let page = params.page.unwrap_or(1);
  let member_id = viewer.map(|viewer| viewer.into_deep_inner().id);

  let games = db_conn
    .run(move |conn| {
      Game::search(
        params.search.as_deref(),
        params.order.unwrap_or(GameOrder::Latest),
      )
      .paginate(page)
      .load_and_count_pages::<Game>(conn)
    })
    .await?;

  let member_ids = games
    .records
    .iter()
    .map(|game| game.member_id)
    .collect::<HashSet<_>>()
    .into_iter()
    .collect::<Vec<_>>();

  let members = db_conn
    .run(move |conn| Member::filter_by_ids(member_ids).load::<Member>(conn))
    .await?;

  let starred_ids: HashSet<Uuid> = match member_id {
    Some(member_id) => {
      let game_ids = games.records.iter().map(|game| game.id).collect::<Vec<_>>();

      db_conn
        .run(move |conn| {
          StarredGame::filter_by_member_and_game_ids(&member_id, game_ids)
            .load::<StarredGame>(conn)
        })
        .await?
        .into_iter()
        .map(|starred_game| starred_game.game_id)
        .collect()
    }
    None => HashSet::new(),
  };

  let game_views = games
    .records
    .clone()
    .into_iter()
    .map(|game| {
      let member = members.iter().find(|member| member.id == game.member_id);
      let is_starred = starred_ids.contains(&game.id);

      GameView::new(game, member, is_starred)
    })
    .collect::<Vec<_>>();

  Response::success(games.records(game_views))
}

#[openapi(tag = "Gameshare")]
#[get("/games/<id>")]
pub async fn get(id: Uuid, db_conn: DbConn) -> QueryResponse<GameDetailView> {
  let game: Game = db_conn
    .run(move |conn| Game::find_by_id(&id).first::<Game>(conn))
    .await?;

  let images = db_conn
    .run(move |conn| GameImage::in_position_order(&id).load::<GameImage>(conn))
    .await?;

  let creator_id = game.member_id;

  let member: Member = db_conn
    .run(move |conn| Member::find_by_id(&creator_id).first::<Member>(conn))
    .await?;

  Response::success(GameDetailView::new(game, images, &member))
}

#[openapi(skip)]
#[post("/games", data = "<game_request>")]
pub async fn create(
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
  s3: S3,
  config: &State<Config>,
  game_request: Form<CreateGameRequest<'_>>,
) -> MutationResponse<GameDetailView> {
  let mut game_request = game_request.into_inner();

  if let Err(errors) = game_request.validate() {
    return Response::validation_error(errors);
  }

  let member = auth.into_deep_inner();
  let s3 = s3.into_inner();

  for image in game_request.images.iter() {
    image_key(image.image.content_type())?;
  }

  let mut image_keys = Vec::with_capacity(game_request.images.len());

  for image in game_request.images.iter_mut() {
    image_keys.push(upload_image(&s3, config, &mut image.image).await?);
  }

  let title = game_request.title.clone();
  let description = game_request.description.clone();
  let thumbnail_key = image_keys.first().cloned().unwrap();
  let member_id = member.id;

  let image_descriptions = game_request
    .images
    .iter()
    .map(|image| image.description.clone())
    .collect::<Vec<_>>();

  let game: Game = db_conn
    .run(move |conn| {
      conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let game: Game = diesel::insert_into(games::table)
          .values(
            GameChangeset::default()
              .member_id(member_id)
              .title(title)
              .description(description)
              .thumbnail_key(thumbnail_key),
          )
          .get_result::<Game>(conn)?;

        for (position, (image_key, image_description)) in
          image_keys.into_iter().zip(image_descriptions).enumerate()
        {
          diesel::insert_into(game_images::table)
            .values(
              GameImageChangeset::default()
                .game_id(game.id)
                .image_key(image_key)
                .description(image_description)
                .position(position as i32),
            )
            .execute(conn)?;
        }

        Ok(game)
      })
    })
    .await?;

  let game_id = game.id;

  let images = db_conn
    .run(move |conn| GameImage::in_position_order(&game_id).load::<GameImage>(conn))
    .await?;

  Response::success(GameDetailView::new(game, images, &member))
}

#[openapi(skip)]
#[put("/games/<id>", data = "<game_request>")]
pub async fn update(
  id: Uuid,
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
  s3: S3,
  config: &State<Config>,
  game_request: Form<UpdateGameRequest<'_>>,
) -> MutationResponse<StatusResponse> {
  let mut game_request = game_request.into_inner();

  if let Err(errors) = game_request.validate() {
    return Response::validation_error(errors);
  }

  let member = auth.into_deep_inner();

  let game: Game = db_conn
    .run(move |conn| Game::find_by_id(&id).first::<Game>(conn))
    .await?;

  if !member.can_manage(&game) {
    return Response::mutation_error(Status::Unauthorized);
  }

  for image in game_request.images.iter() {
    image_key(image.image.content_type())?;
  }

  let s3 = s3.into_inner();
  let mut image_updates = Vec::with_capacity(game_request.images.len());

  for image in game_request.images.iter_mut() {
    let image_id = image.id;

    let existing: GameImage = db_conn
      .run(move |conn| GameImage::find_for_game(&image_id, &id).first::<GameImage>(conn))
      .await?;

    let key = upload_image(&s3, config, &mut image.image).await?;

    image_updates.push((existing.id, key, image.description.clone()));
  }

  let title = game_request.title.clone();
  let description = game_request.description.clone();

  db_conn
    .run(move |conn| {
      conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::update(Game::find_by_id(&id))
          .set(GameChangeset::default().title(title).description(description))
          .execute(conn)?;

        for (image_id, key, image_description) in image_updates {
          diesel::update(GameImage::find_by_id(&image_id))
            .set(
              GameImageChangeset::default()
                .image_key(key)
                .description(image_description),
            )
            .execute(conn)?;
        }

        Ok(())
      })
    })
    .await?;

  Response::status(Status::Ok)
}

#[openapi(tag = "Gameshare")]
#[delete("/games/<id>")]
pub async fn delete(
  id: Uuid,
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
) -> MutationResponse<StatusResponse> {
  let member = auth.into_deep_inner();

  let game: Game = db_conn
    .run(move |conn| Game::find_by_id(&id).first::<Game>(conn))
    .await?;

  if !member.can_manage(&game) {
    return Response::mutation_error(Status::Unauthorized);
  }

  db_conn
    .run(move |conn| {
      conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(GameImage::filter_by_game_id(&id)).execute(conn)?;
        diesel::delete(StarredGame::filter_by_game_id(&id)).execute(conn)?;
        diesel::delete(ReportedGame::filter_by_game_id(&id)).execute(conn)?;
        diesel::delete(Game::find_by_id(&id)).execute(conn)
      })
    })
    .await?;

  Response::status(Status::Ok)
}

#[openapi(tag = "Gameshare")]
#[post("/games/starred/<id>")]
pub async fn star(
  id: Uuid,
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
) -> MutationResponse<StatusResponse> {
  let member_id = auth.into_deep_inner().id;

  db_conn
    .run(move |conn| Game::find_by_id(&id).first::<Game>(conn))
    .await?;

  let already_starred = db_conn
    .run(move |conn| {
      diesel::select(exists(StarredGame::find_by_member_and_game(&member_id, &id)))
        .get_result::<bool>(conn)
    })
    .await?;

  if already_starred {
    return Response::mutation_error(Status::BadRequest);
  }

  db_conn
    .run(move |conn| {
      conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(starred_games::table)
          .values(
            StarredGameChangeset::default()
              .member_id(member_id)
              .game_id(id),
          )
          .execute(conn)?;

        diesel::update(Game::find_by_id(&id))
          .set(games::starred_count.eq(games::starred_count + 1))
          .execute(conn)
      })
    })
    .await?;

  Response::status(Status::Ok)
}

#[openapi(tag = "Gameshare")]
#[delete("/games/unstarred/<id>")]
pub async fn unstar(
  id: Uuid,
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
) -> MutationResponse<StatusResponse> {
  let member_id = auth.into_deep_inner().id;

  db_conn
    .run(move |conn| Game::find_by_id(&id).first::<Game>(conn))
    .await?;

  let starred_game: StarredGame = db_conn
    .run(move |conn| {
      StarredGame::find_by_member_and_game(&member_id, &id).first::<StarredGame>(conn)
    })
    .await?;

  let starred_game_id = starred_game.id;

  db_conn
    .run(move |conn| {
      conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::update(Game::find_by_id(&id))
          .set(games::starred_count.eq(games::starred_count - 1))
          .execute(conn)?;

        diesel::delete(StarredGame::find_by_id(&starred_game_id)).execute(conn)
      })
    })
    .await?;

  Response::status(Status::Ok)
}

#[openapi(tag = "Gameshare")]
#[post("/games/report/<id>", data = "<report_request>")]
pub async fn report(
  id: Uuid,
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
  report_request: Json<ReportGameRequest>,
) -> MutationResponse<StatusResponse> {
  let member_id = auth.into_deep_inner().id;

  let already_reported = db_conn
    .run(move |conn| {
      diesel::select(exists(ReportedGame::find_by_reporter_and_game(
        &member_id, &id,
      )))
      .get_result::<bool>(conn)
    })
    .await?;

  if already_reported {
    return Response::mutation_error(Status::BadRequest);
  }

  let game: Game = db_conn
    .run(move |conn| Game::find_by_id(&id).first::<Game>(conn))
    .await?;

  let report_type = report_request.report_type;

  db_conn
    .run(move |conn| {
      diesel::insert_into(reported_games::table)
        .values(
          ReportedGameChangeset::default()
            .game_id(id)
            .report_member_id(member_id)
            .reported_member_id(game.member_id)
            .report_type(report_type),
        )
        .execute(conn)
    })
    .await?;

  Response::status(Status::Ok)
}

#[openapi(tag = "Gameshare")]
#[get("/games/mine?<page>")]
pub async fn list_mine(
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
  page: Option<i64>,
) -> QueryResponse<PaginatedResult<GameView>> {
  let member = auth.into_deep_inner();
  let member_id = member.id;
  let page = page.unwrap_or(1);

  let games = db_conn
    .run(move |conn| {
      Game::filter_by_member_id(&member_id)
        .paginate(page)
        .load_and_count_pages::<Game>(conn)
    })
    .await?;

  let game_ids = games.records.iter().map(|game| game.id).collect::<Vec<_>>();

  let starred_ids: HashSet<Uuid> = db_conn
    .run(move |conn| {
      StarredGame::filter_by_member_and_game_ids(&member_id, game_ids).load::<StarredGame>(conn)
    })
    .await?
    .into_iter()
    .map(|starred_game| starred_game.game_id)
    .collect();

  let game_views = games
    .records
    .clone()
    .into_iter()
    .map(|game| {
      let is_starred = starred_ids.contains(&game.id);

      GameView::new(game, Some(&member), is_starred)
    })
    .collect::<Vec<_>>();

  Response::success(games.records(game_views))
}

#[openapi(tag = "Gameshare")]
#[get("/games/starred")]
pub async fn list_starred(
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
) -> QueryResponse<Vec<StarredGameView>> {
  let member_id = auth.into_deep_inner().id;

  let starred_games = db_conn
    .run(move |conn| StarredGame::filter_by_member_id(&member_id).load::<StarredGame>(conn))
    .await?;

  let game_ids = starred_games
    .iter()
    .map(|starred_game| starred_game.game_id)
    .collect::<Vec<_>>();

  let games = db_conn
    .run(move |conn| Game::filter_by_ids(game_ids).load::<Game>(conn))
    .await?;

  let starred_game_views = starred_games
    .into_iter()
    .filter_map(|starred_game| {
      games
        .iter()
        .find(|game| game.id == starred_game.game_id)
        .map(|game| StarredGameView::new(starred_game, game))
    })
    .collect::<Vec<_>>();

  Response::success(starred_game_views)
}

#[openapi(tag = "Gameshare")]
#[get("/games/reported")]
pub async fn list_reported(
  db_conn: DbConn,
  auth: Auth<Jwt<Member>>,
) -> QueryResponse<Vec<ReportedGameView>> {
  let member = auth.into_deep_inner();

  if member.role != MemberRole::Admin {
    return Response::query_error(Status::Unauthorized);
  }

  let reported_games = db_conn
    .run(move |conn| ReportedGame::all().load::<ReportedGame>(conn))
    .await?;

  let game_ids = reported_games
    .iter()
    .map(|reported_game| reported_game.game_id)
    .collect::<HashSet<_>>()
    .into_iter()
    .collect::<Vec<_>>();

  let games = db_conn
    .run(move |conn| Game::filter_by_ids(game_ids).load::<Game>(conn))
    .await?;

  let reported_game_views = reported_games
    .into_iter()
    .filter_map(|reported_game| {
      games
        .iter()
        .find(|game| game.id == reported_game.game_id)
        .map(|game| ReportedGameView::new(reported_game, game))
    })
    .collect::<Vec<_>>();

  Response::success(reported_game_views)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builds_keys_for_allowed_image_types() {
    for content_type in [ContentType::JPEG, ContentType::PNG] {
      let key = image_key(Some(&content_type))
        .unwrap_or_else(|_| panic!("{} rejected", content_type));

      assert!(key.starts_with("games/"));

      let extension = key.rsplit('.').next().unwrap();
      assert!(!extension.is_empty());
      assert!(extension.chars().all(|c| c.is_ascii_alphanumeric()));
    }
  }

  #[test]
  fn rejects_unsupported_content_types() {
    match image_key(Some(&ContentType::PDF)) {
      Err(MutationError::Status(status)) => assert_eq!(status, Status::UriTooLong),
      _ => panic!("expected unsupported extension error"),
    }

    match image_key(Some(&ContentType::GIF)) {
      Err(MutationError::Status(status)) => assert_eq!(status, Status::UriTooLong),
      _ => panic!("expected unsupported extension error"),
    }
  }

  #[test]
  fn rejects_missing_content_type() {
    match image_key(None) {
      Err(MutationError::Status(status)) => assert_eq!(status, Status::UriTooLong),
      _ => panic!("expected unsupported extension error"),
    }
  }

  #[test]
  fn generates_distinct_keys_per_upload() {
    let first = image_key(Some(&ContentType::PNG)).unwrap_or_else(|_| panic!("png rejected"));
    let second = image_key(Some(&ContentType::PNG)).unwrap_or_else(|_| panic!("png rejected"));

    assert_ne!(first, second);
  }
}
