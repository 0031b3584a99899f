use std::sync::Arc;

use scoreboard::{
    store::{KeyValueStore, StoreKey},
    AppState, CatalogService, LedgerService, ScoreboardStore,
};

use super::mocks::{FlakyKeyValueStore, MockCatalogFetcher};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub backend: Arc<FlakyKeyValueStore>,
    pub store: ScoreboardStore,
    pub fetcher: MockCatalogFetcher,
    pub state: AppState,
}

pub struct TestSetupBuilder {
    seeded: Vec<(StoreKey, String)>,
    players: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            seeded: vec![],
            players: vec![],
        }
    }

    /// Raw value placed in the backing store before the services load
    pub fn with_stored(mut self, key: StoreKey, raw: &str) -> Self {
        self.seeded.push((key, raw.to_string()));
        self
    }

    pub fn with_players(mut self, players: Vec<&str>) -> Self {
        self.players = players.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_four_players(self) -> Self {
        self.with_players(vec!["Alice", "Bob", "Carol", "Dave"])
    }

    pub async fn build(self) -> TestSetup {
        let backend = Arc::new(FlakyKeyValueStore::new());
        for (key, raw) in self.seeded {
            backend.set(key, raw).await.unwrap();
        }

        let fetcher = MockCatalogFetcher::new();
        let store = ScoreboardStore::new(backend.clone());
        let state = load_state(&store, &fetcher).await;

        for name in &self.players {
            state.ledger.register_player(name).await.unwrap();
        }

        TestSetup {
            backend,
            store,
            fetcher,
            state,
        }
    }
}

impl TestSetup {
    /// Rebuilds the services from whatever the backing store holds,
    /// as a server restart would
    pub async fn restart(&mut self) {
        self.state = load_state(&self.store, &self.fetcher).await;
    }
}

async fn load_state(store: &ScoreboardStore, fetcher: &MockCatalogFetcher) -> AppState {
    let ledger = Arc::new(LedgerService::load(store.clone()).await);
    let catalog = Arc::new(CatalogService::load(store.clone(), Arc::new(fetcher.clone())).await);
    AppState::new(ledger, catalog)
}
