mod indexer_lookup;
mod player_index_repository;

pub use indexer_lookup::MongoIndexerLookup;
pub use player_index_repository::MongoPlayerIndexRepository;
