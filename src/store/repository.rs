use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::{errors::StoreError, keys::StoreKey};

/// Raw key-value backing store. Values are opaque strings; encoding lives in
/// `ScoreboardStore`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: StoreKey) -> Result<(), StoreError>;
}

/// In-memory implementation of KeyValueStore for development and testing
///
/// Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<StoreKey, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a store with pre-populated raw values
    pub fn with_values(values: Vec<(StoreKey, String)>) -> Self {
        Self {
            values: Arc::new(RwLock::new(values.into_iter().collect())),
        }
    }

    pub async fn contains(&self, key: StoreKey) -> bool {
        self.values.read().await.contains_key(&key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError> {
        debug!(%key, bytes = value.len(), "Writing value to memory");
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        debug!(%key, "Removing value from memory");
        self.values.write().await.remove(&key);
        Ok(())
    }
}

/// PostgreSQL implementation of the key-value store, one row per key
pub struct PostgresKeyValueStore {
    pool: PgPool,
}

impl PostgresKeyValueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the backing table when it does not exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS scoreboard_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create scoreboard_store table");
            StoreError::from(e)
        })?;

        debug!("scoreboard_store table ready");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for PostgresKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let row = sqlx::query("SELECT value FROM scoreboard_store WHERE key = $1")
            .bind(key.as_ref())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, %key, "Failed to read value from database");
                StoreError::from(e)
            })?;

        Ok(row.map(|row| row.get("value")))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO scoreboard_store (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
        )
        .bind(key.as_ref())
        .bind(&value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, %key, "Failed to write value to database");
            StoreError::from(e)
        })?;

        debug!(%key, bytes = value.len(), "Value written to database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM scoreboard_store WHERE key = $1")
            .bind(key.as_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, %key, "Failed to remove value from database");
                StoreError::from(e)
            })?;

        Ok(())
    }
}
