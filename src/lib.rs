// Library crate for the scoreboard service
// This file exposes the public API for integration tests

pub mod catalog;
pub mod config;
pub mod ledger;
pub mod routes;
pub mod scoring;
pub mod shared;
pub mod store;
pub mod transfer;

// Re-export commonly used types for easier access in tests
pub use catalog::{CatalogEntry, CatalogFetcher, CatalogService};
pub use config::AppConfig;
pub use ledger::{Game, LedgerError, LedgerService, NewSession, Player, PlayerResult};
pub use routes::app_router;
pub use shared::{AppError, AppState};
pub use store::{ScoreboardStore, StoreKey};
pub use transfer::{ExportDocument, TransferService};
