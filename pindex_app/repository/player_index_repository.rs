use pindex_types::{
    ObjectId,
    errors::ApplicationError,
    player_index::{PlayerIndex, PlayerIndexReportRow},
};

#[async_trait::async_trait]
pub trait PlayerIndexRepository: Send + Sync {
    /// Returns all records of a player, in storage order.
    async fn list_by_player(&self, player_id: ObjectId)
    -> Result<Vec<PlayerIndex>, ApplicationError>;

    /// Returns a record by id, `None` if there is no such record.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<PlayerIndex>, ApplicationError>;

    /// Validates the value against its indexer, then inserts (no id) or
    /// replaces (id set) the record. Returns the record id.
    ///
    /// Replacing an id that is not stored does nothing and still returns the id.
    async fn upsert(&self, record: &PlayerIndex) -> Result<ObjectId, ApplicationError>;

    /// Deletes a record by id. Missing ids are ignored.
    async fn delete_by_id(&self, id: ObjectId) -> Result<(), ApplicationError>;

    /// Deletes every record of a player.
    async fn delete_all_of_player(&self, player_id: ObjectId) -> Result<(), ApplicationError>;

    /// Joins records with their player and indexer, sorted by player name
    /// then indexer name. Records missing either side are left out.
    async fn list_all_joined(&self) -> Result<Vec<PlayerIndexReportRow>, ApplicationError>;
}
