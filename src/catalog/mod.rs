// Public API - what other modules can use
pub use client::{BggClient, CatalogFetcher};
pub use errors::CatalogError;
pub use handlers::{
    create_catalog_entry, delete_catalog_entry, get_username, list_catalog, set_username,
    sync_catalog,
};
pub use models::{CatalogEntry, CatalogSync};
pub use parser::parse_collection;
pub use service::CatalogService;

// Internal modules
mod client;
mod errors;
mod handlers;
pub mod models;
mod parser;
mod service;
mod types;
