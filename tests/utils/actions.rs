use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

use scoreboard::app_router;

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Sends a request through the full router and decodes the JSON reply
    pub async fn send(&self, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }
        let request = request
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app_router(self.state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> StatusCode {
        self.send("DELETE", uri, None).await.0
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Looks up a registered player's id by name
    pub async fn player_id(&self, name: &str) -> Uuid {
        self.state
            .ledger
            .players()
            .await
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
            .unwrap_or_else(|| panic!("player {name} should be registered"))
    }

    /// Looks up a player as served by `GET /players`
    pub async fn player_json(&self, name: &str) -> Value {
        let (_, players) = self.get("/players").await;
        players
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == name)
            .cloned()
            .unwrap_or_else(|| panic!("player {name} should be listed"))
    }

    /// Records a game and returns the stored game as JSON
    pub async fn record_game(&self, session: Value) -> Value {
        let (status, game) = self.post("/games", session).await;
        assert_eq!(status, StatusCode::CREATED, "game should be recorded: {game}");
        game
    }
}
