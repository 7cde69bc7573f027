use pindex_types::{ObjectId, errors::ApplicationError};

/// Range check owned by the indexer side.
#[async_trait::async_trait]
pub trait IndexerLookup: Send + Sync {
    /// Whether `value` is allowed for the indexer with the given id.
    async fn is_within_range(&self, indexer_id: ObjectId, value: f64)
    -> Result<bool, ApplicationError>;
}
