use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use super::{
    client::CatalogFetcher,
    errors::CatalogError,
    models::{CatalogEntry, CatalogSync},
};
use crate::store::ScoreboardStore;

/// Board game catalog: hand-curated entries or a synced remote collection
pub struct CatalogService {
    store: ScoreboardStore,
    fetcher: Arc<dyn CatalogFetcher>,
    entries: RwLock<Vec<CatalogEntry>>,
}

impl CatalogService {
    pub fn new(store: ScoreboardStore, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        Self {
            store,
            fetcher,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Restores entries from the store; unreadable data starts out empty
    pub async fn load(store: ScoreboardStore, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        let entries = store.load_board_games().await;
        info!(entry_count = entries.len(), "Catalog loaded");

        Self {
            store,
            fetcher,
            entries: RwLock::new(entries),
        }
    }

    /// Entries ordered by name
    pub async fn list(&self) -> Vec<CatalogEntry> {
        let mut entries = self.entries.read().await.clone();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    #[instrument(skip(self))]
    pub async fn add_entry(&self, name: &str) -> Result<CatalogEntry, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidName);
        }

        let mut entries = self.entries.write().await;
        let lowered = name.to_lowercase();
        if entries.iter().any(|e| e.name.to_lowercase() == lowered) {
            return Err(CatalogError::DuplicateEntry(name.to_string()));
        }

        let entry = CatalogEntry::curated(name);
        let mut staged = entries.clone();
        staged.push(entry.clone());

        self.store.save_board_games(&staged).await?;
        *entries = staged;

        info!(entry_id = %entry.id, name = %entry.name, "Catalog entry added");
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn delete_entry(&self, entry_id: &str) -> Result<(), CatalogError> {
        let mut entries = self.entries.write().await;
        let Some(index) = entries.iter().position(|e| e.id == entry_id) else {
            return Err(CatalogError::NotFound(entry_id.to_string()));
        };

        let mut staged = entries.clone();
        staged.remove(index);

        self.store.save_board_games(&staged).await?;
        *entries = staged;
        Ok(())
    }

    pub async fn username(&self) -> Result<Option<String>, CatalogError> {
        Ok(self.store.load_bgg_username().await?)
    }

    pub async fn set_username(&self, username: &str) -> Result<(), CatalogError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CatalogError::MissingUsername);
        }
        Ok(self.store.save_bgg_username(username).await?)
    }

    /// Remembers `username` and replaces the catalog with their owned games.
    ///
    /// A failed fetch is not an error: the catalog keeps its entries and the
    /// sync reports nothing fetched.
    #[instrument(skip(self))]
    pub async fn sync(&self, username: &str) -> Result<CatalogSync, CatalogError> {
        self.set_username(username).await?;
        let username = username.trim().to_string();

        let fetched = match self.fetcher.fetch_collection(&username).await {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, username = %username, "Catalog fetch failed, keeping current entries");
                return Ok(CatalogSync {
                    username,
                    fetched: 0,
                });
            }
        };

        let mut entries = self.entries.write().await;
        self.store.save_board_games(&fetched).await?;
        let count = fetched.len();
        *entries = fetched;

        info!(username = %username, entry_count = count, "Catalog synced");
        Ok(CatalogSync {
            username,
            fetched: count,
        })
    }
}
