pub mod games;
pub mod me;
pub mod members;
pub mod sessions;
