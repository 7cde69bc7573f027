pub mod mapping;
pub mod pipeline;

mod connection;
mod models;
mod repository;

pub use connection::establish_database;
pub use models::{INDEXER_COLLECTION, PLAYER_COLLECTION, PLAYER_INDEX_COLLECTION};
pub use repository::*;
