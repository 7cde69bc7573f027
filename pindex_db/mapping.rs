use mongodb::bson::{self, Document};

use pindex_types::{
    errors::DbError,
    indexer::Indexer,
    player_index::{PlayerIndex, PlayerIndexReportRow},
};

use crate::models::{self as db_models};

impl From<&PlayerIndex> for db_models::PlayerIndex {
    fn from(record: &PlayerIndex) -> Self {
        Self {
            id: record.id,
            player_id: record.player_id,
            index_id: record.index_id,
            value: record.value,
        }
    }
}

impl From<db_models::PlayerIndex> for PlayerIndex {
    fn from(doc: db_models::PlayerIndex) -> Self {
        Self {
            id: doc.id,
            player_id: doc.player_id,
            index_id: doc.index_id,
            value: doc.value,
        }
    }
}

impl From<db_models::Indexer> for Indexer {
    fn from(doc: db_models::Indexer) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            min_value: doc.min_value,
            max_value: doc.max_value,
        }
    }
}

impl From<db_models::PlayerIndexReportRow> for PlayerIndexReportRow {
    fn from(row: db_models::PlayerIndexReportRow) -> Self {
        Self {
            id: row.id,
            player_id: row.player_id,
            player_name: row.player_name,
            player_age: row.player_age,
            index_name: row.index_name,
            value: row.value,
        }
    }
}

/// Decodes one document produced by the report pipeline.
pub fn report_row_from_document(doc: Document) -> Result<PlayerIndexReportRow, DbError> {
    let row: db_models::PlayerIndexReportRow = bson::from_document(doc)?;
    Ok(row.into())
}
