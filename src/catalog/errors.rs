use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    #[error("Collection still processing after {attempts} attempts")]
    StillProcessing { attempts: u32 },

    #[error("Failed to parse collection: {0}")]
    Parse(String),

    #[error("Name must not be empty")]
    InvalidName,

    #[error("A username is required")]
    MissingUsername,

    #[error("A catalog entry named '{0}' already exists")]
    DuplicateEntry(String),

    #[error("Catalog entry not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
