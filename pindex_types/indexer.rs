use mongodb::bson::oid::ObjectId;

/// A named measure with the inclusive range its values must fall in.
#[derive(Debug, Clone, PartialEq)]
pub struct Indexer {
    pub id: ObjectId,
    pub name: String,
    pub min_value: f64,
    pub max_value: f64,
}

impl Indexer {
    /// Checks `min_value <= value <= max_value`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}
