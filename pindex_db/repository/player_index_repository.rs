use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use std::sync::Arc;

use pindex_app::repository::{IndexerLookup, PlayerIndexRepository};
use pindex_types::{
    ObjectId,
    errors::{ApplicationError, DbError, ValidationError},
    player_index::{PlayerIndex, PlayerIndexReportRow},
};

use crate::{
    mapping::report_row_from_document,
    models::{self as db_models, PLAYER_INDEX_COLLECTION},
    pipeline::player_index_report_pipeline,
};

/// Implements PlayerIndexRepository over the `player_index` collection.
#[derive(Clone)]
pub struct MongoPlayerIndexRepository {
    collection: Collection<db_models::PlayerIndex>,
    indexers: Arc<dyn IndexerLookup>,
}

impl MongoPlayerIndexRepository {
    pub fn new(db: &Database, indexers: Arc<dyn IndexerLookup>) -> Self {
        Self {
            collection: db.collection(PLAYER_INDEX_COLLECTION),
            indexers,
        }
    }
}

#[async_trait::async_trait]
impl PlayerIndexRepository for MongoPlayerIndexRepository {
    async fn list_by_player(
        &self,
        player_id: ObjectId,
    ) -> Result<Vec<PlayerIndex>, ApplicationError> {
        let docs: Vec<db_models::PlayerIndex> = self
            .collection
            .find(doc! { "player_id": player_id })
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
            .try_collect()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<PlayerIndex>, ApplicationError> {
        let doc = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(doc.map(Into::into))
    }

    async fn upsert(&self, record: &PlayerIndex) -> Result<ObjectId, ApplicationError> {
        if !self
            .indexers
            .is_within_range(record.index_id, record.value)
            .await?
        {
            tracing::warn!(
                indexer_id = %record.index_id,
                value = record.value,
                "Rejected player index value outside indexer range"
            );
            return Err(ValidationError::ValueOutOfRange {
                indexer_id: record.index_id,
                value: record.value,
            }
            .into());
        }

        let doc = db_models::PlayerIndex::from(record);

        match record.id {
            None => {
                let result = self
                    .collection
                    .insert_one(&doc)
                    .await
                    .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    DbError::UnexpectedInsertedId(result.inserted_id.to_string())
                })?;

                tracing::debug!(%id, player_id = %record.player_id, "Inserted player index");
                Ok(id)
            }
            Some(id) => {
                let result = self
                    .collection
                    .replace_one(doc! { "_id": id }, &doc)
                    .await
                    .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

                if result.matched_count == 0 {
                    tracing::warn!(%id, "No player index matched, nothing replaced");
                } else {
                    tracing::debug!(%id, "Replaced player index");
                }

                Ok(id)
            }
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), ApplicationError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        tracing::debug!(%id, deleted = result.deleted_count, "Deleted player index");
        Ok(())
    }

    async fn delete_all_of_player(&self, player_id: ObjectId) -> Result<(), ApplicationError> {
        let result = self
            .collection
            .delete_many(doc! { "player_id": player_id })
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        tracing::debug!(
            %player_id,
            deleted = result.deleted_count,
            "Deleted player indexes of player"
        );
        Ok(())
    }

    async fn list_all_joined(&self) -> Result<Vec<PlayerIndexReportRow>, ApplicationError> {
        let docs: Vec<Document> = self
            .collection
            .aggregate(player_index_report_pipeline())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
            .try_collect()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let rows = docs
            .into_iter()
            .map(report_row_from_document)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(rows)
    }
}
