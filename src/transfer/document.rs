use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ledger::{Game, LedgerError, Player, PlayerId};

/// Version written into every export.
pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// Whole-scoreboard backup: roster plus game log in one JSON object.
///
/// Documents written before versioning carry no `version`; they decode as
/// version 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub players: Vec<Player>,
    pub games: Vec<Game>,
}

/// Wire shape accepted on import
#[derive(Debug, Deserialize)]
struct DocumentRecord {
    #[serde(default = "legacy_version")]
    version: u32,
    players: Vec<RosterRecord>,
    games: Vec<Game>,
}

/// Roster entry as read from a backup. Aggregate fields are not read;
/// they are rebuilt from the game log.
#[derive(Debug, Deserialize)]
struct RosterRecord {
    id: PlayerId,
    name: String,
}

fn legacy_version() -> u32 {
    1
}

impl ExportDocument {
    pub fn new(players: Vec<Player>, games: Vec<Game>) -> Self {
        Self {
            version: EXPORT_FORMAT_VERSION,
            players,
            games,
        }
    }

    /// Decodes and checks a backup. Players come back with empty aggregates.
    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        let record: DocumentRecord =
            serde_json::from_str(raw).map_err(LedgerError::ImportDecode)?;
        if record.version > EXPORT_FORMAT_VERSION {
            return Err(LedgerError::UnsupportedVersion {
                found: record.version,
                supported: EXPORT_FORMAT_VERSION,
            });
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for player in &record.players {
            if !ids.insert(player.id) {
                return Err(LedgerError::InvalidDocument(format!(
                    "player id {} appears more than once",
                    player.id
                )));
            }
            if !names.insert(player.name.to_lowercase()) {
                return Err(LedgerError::InvalidDocument(format!(
                    "player name '{}' appears more than once",
                    player.name
                )));
            }
        }

        let players = record
            .players
            .into_iter()
            .map(|player| Player {
                id: player.id,
                name: player.name,
                total_points: 0.0,
                games_played: 0,
            })
            .collect();

        Ok(Self {
            version: record.version,
            players,
            games: record.games,
        })
    }

    pub fn to_json(&self) -> Result<String, LedgerError> {
        serde_json::to_string_pretty(self).map_err(LedgerError::ExportEncode)
    }
}
