use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::document::ExportDocument;
use crate::ledger::{LedgerError, LedgerService};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub players: usize,
    pub games: usize,
}

/// Whole-state backup and restore on top of the ledger
pub struct TransferService {
    ledger: Arc<LedgerService>,
}

impl TransferService {
    pub fn new(ledger: Arc<LedgerService>) -> Self {
        Self { ledger }
    }

    #[instrument(skip(self))]
    pub async fn export(&self) -> Result<String, LedgerError> {
        let (players, games) = self.ledger.snapshot().await;
        info!(
            player_count = players.len(),
            game_count = games.len(),
            "Exporting scoreboard"
        );
        ExportDocument::new(players, games).to_json()
    }

    /// Replaces the current roster and log with the document's contents.
    ///
    /// A document that fails to decode leaves the current state as it was.
    #[instrument(skip(self, raw), fields(bytes = raw.len()))]
    pub async fn import(&self, raw: &str) -> Result<ImportSummary, LedgerError> {
        let document = ExportDocument::from_json(raw).map_err(|err| {
            warn!(error = %err, "Rejecting import document");
            err
        })?;

        let summary = ImportSummary {
            players: document.players.len(),
            games: document.games.len(),
        };
        self.ledger
            .replace_all(document.players, document.games)
            .await?;

        info!(players = summary.players, games = summary.games, "Import complete");
        Ok(summary)
    }
}
