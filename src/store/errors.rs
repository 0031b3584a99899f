use thiserror::Error;

use super::keys::StoreKey;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backing store error: {0}")]
    Backend(String),

    #[error("Failed to decode value stored under '{key}': {source}")]
    Decode {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
