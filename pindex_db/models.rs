use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize};

pub const PLAYER_INDEX_COLLECTION: &str = "player_index";
pub const PLAYER_COLLECTION: &str = "player";
pub const INDEXER_COLLECTION: &str = "indexer";

/// Stored shape of a `player_index` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerIndex {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub player_id: ObjectId,
    pub index_id: ObjectId,
    pub value: f64,
}

/// Fields of an `indexer` document needed for range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indexer {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub min_value: f64,
    pub max_value: f64,
}

/// Output shape of the report pipeline's `$project` stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerIndexReportRow {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub player_id: ObjectId,
    pub player_name: String,
    #[serde(default, deserialize_with = "deserialize_age")]
    pub player_age: Option<i32>,
    pub index_name: String,
    pub value: f64,
}

/// Player ages are written by other tools too: any whole number that fits an
/// `i32` is accepted, whatever its BSON type. Anything else reads as no age.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let age = match Bson::deserialize(deserializer)? {
        Bson::Int32(age) => Some(age),
        Bson::Int64(age) => i32::try_from(age).ok(),
        Bson::Double(age)
            if age.fract() == 0.0 && age >= i32::MIN as f64 && age <= i32::MAX as f64 =>
        {
            Some(age as i32)
        }
        _ => None,
    };

    Ok(age)
}
