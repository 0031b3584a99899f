use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{catalog, ledger, shared::AppState, transfer};

/// Builds the HTTP surface over the given state
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Scoreboard" }))
        .route(
            "/players",
            get(ledger::list_players).post(ledger::create_player),
        )
        .route("/players/:id", delete(ledger::delete_player))
        .route("/players/:id/history", get(ledger::player_history))
        .route("/games", get(ledger::list_games).post(ledger::create_game))
        .route("/games/:id", delete(ledger::delete_game))
        .route("/leaderboard", get(ledger::leaderboard))
        .route("/reset", post(ledger::reset))
        .route("/export", get(transfer::export_scoreboard))
        .route("/import", post(transfer::import_scoreboard))
        .route(
            "/catalog",
            get(catalog::list_catalog).post(catalog::create_catalog_entry),
        )
        .route("/catalog/sync", post(catalog::sync_catalog))
        .route("/catalog/:id", delete(catalog::delete_catalog_entry))
        .route(
            "/settings/bgg-username",
            get(catalog::get_username).put(catalog::set_username),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
