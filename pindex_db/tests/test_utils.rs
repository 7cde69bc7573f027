#[cfg(test)]
pub mod tests {
    use mongodb::{
        Database,
        bson::{Document, doc, oid::ObjectId},
    };
    use std::sync::Arc;

    use pindex_app::{config::Config, logs::setup_logging};
    use pindex_db::{
        INDEXER_COLLECTION, MongoIndexerLookup, MongoPlayerIndexRepository, PLAYER_COLLECTION,
        establish_database,
    };
    use pindex_types::errors::{ApplicationError, DbError, Result};

    pub struct TestContext {
        pub db: Database,
        pub indexers: MongoIndexerLookup,
        pub repo: MongoPlayerIndexRepository,
    }

    impl TestContext {
        pub async fn insert_player(&self, name: &str, age: i32) -> Result<ObjectId> {
            let id = ObjectId::new();
            self.db
                .collection::<Document>(PLAYER_COLLECTION)
                .insert_one(doc! { "_id": id, "name": name, "age": age })
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
            Ok(id)
        }

        pub async fn insert_indexer(
            &self,
            name: &str,
            min_value: f64,
            max_value: f64,
        ) -> Result<ObjectId> {
            let id = ObjectId::new();
            self.db
                .collection::<Document>(INDEXER_COLLECTION)
                .insert_one(doc! {
                    "_id": id,
                    "name": name,
                    "min_value": min_value,
                    "max_value": max_value,
                })
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
            Ok(id)
        }

        pub async fn teardown(self) -> Result<()> {
            self.db
                .drop()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
            Ok(())
        }
    }

    /// Connects to `TEST_DATABASE_URL` using a fresh database per test.
    /// Fails when no test database is configured.
    pub async fn setup_context() -> Result<TestContext> {
        setup_logging();

        let config = Config::test_from_env()?;

        let config = Config {
            database_name: Some(format!("pindex_test_{}", ObjectId::new().to_hex())),
            ..config
        };
        let db = establish_database(&config).await?;

        let indexers = MongoIndexerLookup::new(&db);
        let repo = MongoPlayerIndexRepository::new(&db, Arc::new(indexers.clone()));

        Ok(TestContext { db, indexers, repo })
    }
}
