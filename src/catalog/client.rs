use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use super::{errors::CatalogError, models::CatalogEntry, parser::parse_collection};
use crate::config::CatalogSettings;

/// Source of a user's owned board games
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_collection(&self, username: &str) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// Client for the BoardGameGeek XML collection API.
///
/// The API answers `202 Accepted` while it prepares a collection; the client
/// then waits `retry_delay` and asks again, up to `max_attempts` requests.
pub struct BggClient {
    client: Client,
    settings: CatalogSettings,
}

impl BggClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self { client, settings })
    }

    fn collection_url(&self) -> String {
        format!("{}/collection", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogFetcher for BggClient {
    #[instrument(skip(self))]
    async fn fetch_collection(&self, username: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = self.collection_url();
        let max_attempts = self.settings.max_attempts;

        for attempt in 1..=max_attempts {
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("username", username),
                    ("own", "1"),
                    ("excludesubtype", "boardgameexpansion"),
                ])
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::ACCEPTED {
                debug!(attempt, "Collection is still being prepared");
                if attempt < max_attempts {
                    tokio::time::sleep(self.settings.retry_delay).await;
                }
                continue;
            }

            if !status.is_success() {
                warn!(status = status.as_u16(), "Collection request failed");
                return Err(CatalogError::UnexpectedStatus(status.as_u16()));
            }

            let body = response.text().await?;
            let entries = parse_collection(&body)?;
            info!(attempt, entry_count = entries.len(), "Collection fetched");
            return Ok(entries);
        }

        Err(CatalogError::StillProcessing {
            attempts: max_attempts,
        })
    }
}
