use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("No database name given and the connection string has no default database")]
    MissingDatabaseName,

    #[error("Inserted document got a non-ObjectId _id: {0}")]
    UnexpectedInsertedId(String),

    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}
