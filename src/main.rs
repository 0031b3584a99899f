use scoreboard::{
    catalog::{BggClient, CatalogService},
    config::AppConfig,
    ledger::LedgerService,
    routes::app_router,
    shared::AppState,
    store::{InMemoryKeyValueStore, KeyValueStore, PostgresKeyValueStore, ScoreboardStore},
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoreboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scoreboard server");

    let config = AppConfig::from_env()?;

    // Pick the backing store: PostgreSQL when configured, memory otherwise
    let backend: Arc<dyn KeyValueStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPool::connect(database_url).await?;
            let store = PostgresKeyValueStore::new(pool);
            store.ensure_schema().await?;
            info!("Using PostgreSQL store");
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set, data will not survive a restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };
    let store = ScoreboardStore::new(backend);

    let ledger = Arc::new(LedgerService::load(store.clone()).await);
    let fetcher = Arc::new(BggClient::new(config.catalog.clone())?);
    let catalog = Arc::new(CatalogService::load(store, fetcher).await);

    let app = app_router(AppState::new(ledger, catalog));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
