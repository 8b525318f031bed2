mod game;
mod game_detail;
mod game_image;
mod member;
mod reported_game;
mod starred_game;

pub use game::GameView;
pub use game_detail::GameDetailView;
pub use game_image::GameImageView;
pub use member::MemberView;
pub use reported_game::ReportedGameView;
pub use starred_game::StarredGameView;
