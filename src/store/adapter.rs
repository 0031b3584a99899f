use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::{
    errors::StoreError,
    keys::StoreKey,
    repository::{InMemoryKeyValueStore, KeyValueStore},
};
use crate::catalog::models::CatalogEntry;
use crate::ledger::models::{Game, Player};

/// Typed load/save of the scoreboard collections against a key-value backend.
///
/// `try_load` surfaces missing keys and decode failures to the caller. The
/// `load_*` helpers used at startup fall back to an empty collection instead,
/// logging what was discarded.
#[derive(Clone)]
pub struct ScoreboardStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ScoreboardStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.backend)
    }

    #[instrument(skip(self))]
    pub async fn try_load<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key).await? else {
            debug!(%key, "No stored value");
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode { key, source })
    }

    /// Loads a collection, treating a missing key or an undecodable value as empty
    pub async fn load_or_default<T: DeserializeOwned + Default>(&self, key: StoreKey) -> T {
        match self.try_load(key).await {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                warn!(%key, error = %err, "Discarding unreadable stored value");
                T::default()
            }
        }
    }

    #[instrument(skip(self, value))]
    pub async fn save<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
        self.backend.set(key, encoded).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, key: StoreKey) -> Result<(), StoreError> {
        self.backend.remove(key).await
    }

    pub async fn load_players(&self) -> Vec<Player> {
        self.load_or_default(StoreKey::Players).await
    }

    pub async fn save_players(&self, players: &[Player]) -> Result<(), StoreError> {
        self.save(StoreKey::Players, players).await
    }

    pub async fn load_games(&self) -> Vec<Game> {
        self.load_or_default(StoreKey::Games).await
    }

    pub async fn save_games(&self, games: &[Game]) -> Result<(), StoreError> {
        self.save(StoreKey::Games, games).await
    }

    pub async fn load_board_games(&self) -> Vec<CatalogEntry> {
        self.load_or_default(StoreKey::BoardGames).await
    }

    pub async fn save_board_games(&self, entries: &[CatalogEntry]) -> Result<(), StoreError> {
        self.save(StoreKey::BoardGames, entries).await
    }

    /// The username preference is stored as a plain string, not JSON
    pub async fn load_bgg_username(&self) -> Result<Option<String>, StoreError> {
        self.backend.get(StoreKey::BggUsername).await
    }

    pub async fn save_bgg_username(&self, username: &str) -> Result<(), StoreError> {
        self.backend
            .set(StoreKey::BggUsername, username.to_string())
            .await
    }
}
