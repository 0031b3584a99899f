use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use scoreboard::{
    catalog::CatalogError,
    store::{InMemoryKeyValueStore, KeyValueStore, StoreError, StoreKey},
    CatalogEntry, CatalogFetcher,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Catalog fetcher returning canned entries, or failing when told to
#[derive(Clone)]
pub struct MockCatalogFetcher {
    entries: Arc<RwLock<Vec<CatalogEntry>>>,
    failing: Arc<AtomicBool>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockCatalogFetcher {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
            requested: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_entries(&self, entries: Vec<CatalogEntry>) {
        *self.entries.write().await = entries;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Usernames the fetcher was asked for, in call order
    pub async fn requested_usernames(&self) -> Vec<String> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl CatalogFetcher for MockCatalogFetcher {
    async fn fetch_collection(&self, username: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.requested.write().await.push(username.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::UnexpectedStatus(503));
        }
        Ok(self.entries.read().await.clone())
    }
}

/// In-memory store whose writes can be switched off
pub struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    writes_fail: AtomicBool,
}

impl FlakyKeyValueStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            writes_fail: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.writes_fail.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FlakyKeyValueStore {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError> {
        self.check_writable()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.check_writable()?;
        self.inner.remove(key).await
    }
}
