use thiserror::Error;

use super::models::PlayerId;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Name must not be empty")]
    InvalidName,

    #[error("At least 2 participants are required, got {count}")]
    InsufficientParticipants { count: usize },

    #[error("A game named '{0}' has already been recorded")]
    DuplicateGameName(String),

    #[error("A player named '{0}' already exists")]
    DuplicatePlayerName(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Import document could not be decoded: {0}")]
    ImportDecode(#[source] serde_json::Error),

    #[error("Import document is inconsistent: {0}")]
    InvalidDocument(String),

    #[error("Import document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Export document could not be encoded: {0}")]
    ExportEncode(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
