mod game;
mod game_image;
mod member;
mod reported_game;
mod starred_game;

pub use game::{Game, GameChangeset, GameOrder};
pub use game_image::{GameImage, GameImageChangeset};
pub use member::{Member, MemberChangeset};
pub use reported_game::{ReportedGame, ReportedGameChangeset};
pub use starred_game::{StarredGame, StarredGameChangeset};
