use serde::{Deserialize, Serialize};

/// Request payload for adding a hand-curated catalog entry
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub name: String,
}

/// Request and response payload for the collection username preference
#[derive(Debug, Serialize, Deserialize)]
pub struct UsernamePayload {
    pub username: Option<String>,
}
