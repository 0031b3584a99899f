pub mod adapter;
mod errors;
pub mod keys;
pub mod repository;

pub use adapter::ScoreboardStore;
pub use errors::StoreError;
pub use keys::StoreKey;
pub use repository::{InMemoryKeyValueStore, KeyValueStore, PostgresKeyValueStore};
