//! SeaORM entities for the local database.

pub mod post;
pub mod post_picture;
