use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::models::PlayerId;

/// Request payload for registering a player
#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

/// A session to record: who played and where each of them finished.
///
/// Participants missing from `positions` are treated as position 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub name: String,
    pub participants: Vec<PlayerId>,
    #[serde(default)]
    pub positions: HashMap<PlayerId, u32>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl NewSession {
    /// Builds a session from `(player, position)` pairs in participant order
    pub fn ranked(name: impl Into<String>, placings: &[(PlayerId, u32)]) -> Self {
        Self {
            name: name.into(),
            participants: placings.iter().map(|(player_id, _)| *player_id).collect(),
            positions: placings.iter().copied().collect(),
            date: None,
        }
    }

    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}
