pub mod auth;
pub mod db_conn;
pub mod s3;

pub use auth::{Auth, Jwt};
pub use db_conn::DbConn;
pub use s3::S3;
