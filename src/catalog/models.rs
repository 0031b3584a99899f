use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A board game a session can be named after
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// A locally curated entry with a generated id
    pub fn curated(name: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), name)
    }
}

/// Outcome of refreshing the catalog from a remote collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSync {
    pub username: String,
    pub fetched: usize,
}
