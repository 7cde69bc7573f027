use mongodb::{Collection, Database, bson::doc};

use pindex_app::repository::IndexerLookup;
use pindex_types::{
    ObjectId,
    errors::{ApplicationError, DbError},
    indexer::Indexer,
};

use crate::models::{self as db_models, INDEXER_COLLECTION};

/// Implements IndexerLookup by reading the `indexer` collection.
#[derive(Clone)]
pub struct MongoIndexerLookup {
    collection: Collection<db_models::Indexer>,
}

impl MongoIndexerLookup {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(INDEXER_COLLECTION),
        }
    }

    pub async fn find_by_id(
        &self,
        indexer_id: ObjectId,
    ) -> Result<Option<Indexer>, ApplicationError> {
        let indexer = self
            .collection
            .find_one(doc! { "_id": indexer_id })
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(indexer.map(Into::into))
    }
}

#[async_trait::async_trait]
impl IndexerLookup for MongoIndexerLookup {
    async fn is_within_range(
        &self,
        indexer_id: ObjectId,
        value: f64,
    ) -> Result<bool, ApplicationError> {
        match self.find_by_id(indexer_id).await? {
            Some(indexer) => Ok(indexer.contains(value)),
            None => {
                tracing::warn!(%indexer_id, "Indexer not found, treating value as out of range");
                Ok(false)
            }
        }
    }
}
