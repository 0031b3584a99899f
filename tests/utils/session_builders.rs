use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

// ============================================================================
// Game Session Payloads
// ============================================================================

/// Builds the JSON body for `POST /games`
pub struct SessionBuilder {
    name: String,
    participants: Vec<Uuid>,
    positions: Vec<(Uuid, u32)>,
    date: Option<DateTime<Utc>>,
}

impl SessionBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            participants: vec![],
            positions: vec![],
            date: None,
        }
    }

    pub fn finished(mut self, player_id: Uuid, position: u32) -> Self {
        self.participants.push(player_id);
        self.positions.push((player_id, position));
        self
    }

    /// Adds a participant without a recorded position
    pub fn unplaced(mut self, player_id: Uuid) -> Self {
        self.participants.push(player_id);
        self
    }

    pub fn on_day(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = Utc.with_ymd_and_hms(year, month, day, 20, 0, 0).single();
        self
    }

    pub fn build(self) -> Value {
        let positions: serde_json::Map<String, Value> = self
            .positions
            .into_iter()
            .map(|(player_id, position)| (player_id.to_string(), json!(position)))
            .collect();

        let mut body = json!({
            "name": self.name,
            "participants": self.participants,
            "positions": positions,
        });
        if let Some(date) = self.date {
            body["date"] = json!(date);
        }
        body
    }
}
