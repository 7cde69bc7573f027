#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use pindex_types::{ObjectId, errors::ApplicationError};

    use crate::repository::IndexerLookup;

    /// In-memory indexer ranges. Unknown indexers are never within range.
    #[derive(Default, Clone)]
    pub struct MockIndexerLookup {
        ranges: Arc<Mutex<HashMap<ObjectId, (f64, f64)>>>,
        calls: Arc<Mutex<Vec<(ObjectId, f64)>>>,
    }

    impl MockIndexerLookup {
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers an inclusive range and returns the new indexer id.
        pub fn add_range(&self, min_value: f64, max_value: f64) -> ObjectId {
            let id = ObjectId::new();
            self.set_range(id, min_value, max_value);
            id
        }

        pub fn set_range(&self, indexer_id: ObjectId, min_value: f64, max_value: f64) {
            self.ranges
                .lock()
                .unwrap()
                .insert(indexer_id, (min_value, max_value));
        }

        /// Every `(indexer_id, value)` pair that was checked so far.
        pub fn calls(&self) -> Vec<(ObjectId, f64)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IndexerLookup for MockIndexerLookup {
        async fn is_within_range(
            &self,
            indexer_id: ObjectId,
            value: f64,
        ) -> Result<bool, ApplicationError> {
            self.calls.lock().unwrap().push((indexer_id, value));

            Ok(self
                .ranges
                .lock()
                .unwrap()
                .get(&indexer_id)
                .is_some_and(|(min, max)| value >= *min && value <= *max))
        }
    }

    #[cfg(test)]
    mod mock_tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_indexer_lookup_ranges() -> Result<(), ApplicationError> {
            let lookup = MockIndexerLookup::new();
            let indexer_id = lookup.add_range(0.0, 10.0);

            assert!(lookup.is_within_range(indexer_id, 10.0).await?);
            assert!(!lookup.is_within_range(indexer_id, 15.0).await?);
            assert!(!lookup.is_within_range(ObjectId::new(), 1.0).await?);
            assert_eq!(lookup.calls().len(), 3);

            Ok(())
        }
    }
}
