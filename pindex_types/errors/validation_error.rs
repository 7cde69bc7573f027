use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Errors for values rejected before they reach the database.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("value {value} is outside the permitted range for indexer {indexer_id}")]
    ValueOutOfRange { indexer_id: ObjectId, value: f64 },
}
