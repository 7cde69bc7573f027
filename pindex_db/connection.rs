use mongodb::{Client, Database};

use pindex_app::config::Config;
use pindex_types::errors::DbError;

/// Connects to MongoDB. Pooling, timeouts and retries are left to the driver
/// and the connection string.
pub async fn establish_database(config: &Config) -> Result<Database, DbError> {
    let client = Client::with_uri_str(&config.database_url).await?;

    let database = match &config.database_name {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .ok_or(DbError::MissingDatabaseName)?,
    };

    tracing::info!(database = database.name(), "MongoDB client ready");
    Ok(database)
}
