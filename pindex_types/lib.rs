pub mod errors;
pub mod indexer;
pub mod player_index;

pub use errors::Result;
pub use mongodb::bson::oid::ObjectId;
