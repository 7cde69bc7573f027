use mongodb::bson::oid::ObjectId;

/// A value recorded for a player against one indexer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIndex {
    /// `None` until the record has been written once.
    pub id: Option<ObjectId>,
    pub player_id: ObjectId,
    pub index_id: ObjectId,
    pub value: f64,
}

impl PlayerIndex {
    /// Creates a record that has not been persisted yet.
    pub fn new(player_id: ObjectId, index_id: ObjectId, value: f64) -> Self {
        Self {
            id: None,
            player_id,
            index_id,
            value,
        }
    }

    /// Returns a copy carrying the given id, as it looks after the first write.
    pub fn with_id(self, id: ObjectId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Flattened row of the player/indexer report.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIndexReportRow {
    pub id: ObjectId,
    pub player_id: ObjectId,
    pub player_name: String,
    /// `None` when the player has no usable age.
    pub player_age: Option<i32>,
    pub index_name: String,
    pub value: f64,
}
