use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PlayerId = Uuid;
pub type GameId = Uuid;

/// A registered player and the cached aggregate of every result they hold
/// in the game log. `total_points` and `games_played` are only ever written
/// by the aggregation fold in `crate::scoring`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub total_points: f64,
    pub games_played: u32,
}

impl Player {
    /// Creates a player with a fresh identifier and empty aggregates
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            total_points: 0.0,
            games_played: 0,
        }
    }

    /// Average score as shown on the leaderboard.
    ///
    /// The `* 10 / 4` scaling drives leaderboard ordering and must not change.
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_points / f64::from(self.games_played) * 10.0 / 4.0
    }

    /// Case-insensitive name comparison used for roster uniqueness
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub(crate) fn clear_aggregates(&mut self) {
        self.total_points = 0.0;
        self.games_played = 0;
    }
}

/// A recorded game session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub date: DateTime<Utc>,
    pub player_results: Vec<PlayerResult>,
}

impl Game {
    pub fn new(name: String, player_results: Vec<PlayerResult>, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            date,
            player_results,
        }
    }

    pub fn result_for(&self, player_id: &PlayerId) -> Option<&PlayerResult> {
        self.player_results
            .iter()
            .find(|result| &result.player_id == player_id)
    }

    pub fn includes(&self, player_id: &PlayerId) -> bool {
        self.result_for(player_id).is_some()
    }
}

/// One participant's outcome within a game, referencing the player by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PlayerResultRecord")]
pub struct PlayerResult {
    pub player_id: PlayerId,
    pub position: u32,
    pub score: f64,
}

/// Wire shape accepted on decode. Older backups embed a whole player object
/// under `player`; only its `id` is kept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResultRecord {
    player_id: Option<PlayerId>,
    player: Option<EmbeddedPlayer>,
    position: u32,
    score: f64,
}

#[derive(Debug, Deserialize)]
struct EmbeddedPlayer {
    id: PlayerId,
}

impl TryFrom<PlayerResultRecord> for PlayerResult {
    type Error = String;

    fn try_from(record: PlayerResultRecord) -> Result<Self, Self::Error> {
        let player_id = record
            .player_id
            .or(record.player.map(|player| player.id))
            .ok_or_else(|| "player result has neither playerId nor player".to_string())?;

        Ok(Self {
            player_id,
            position: record.position,
            score: record.score,
        })
    }
}
