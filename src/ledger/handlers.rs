use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::{
    models::{Game, GameId, Player, PlayerId},
    types::{CreatePlayerRequest, NewSession},
};
use crate::{
    scoring::{HistoryEntry, LeaderboardEntry},
    shared::{AppError, AppState},
};

/// GET /players
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(State(state): State<AppState>) -> Json<Vec<Player>> {
    Json(state.ledger.players().await)
}

/// POST /players
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<Player>), AppError> {
    let player = state.ledger.register_player(&request.name).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// DELETE /players/:id
#[instrument(name = "delete_player", skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
) -> Result<StatusCode, AppError> {
    state.ledger.delete_player(&player_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /players/:id/history
#[instrument(name = "player_history", skip(state))]
pub async fn player_history(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(state.ledger.player_history(&player_id).await?))
}

/// GET /games
#[instrument(name = "list_games", skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(state.ledger.games().await)
}

/// POST /games
///
/// Records a session and returns it with the assigned scores
#[instrument(name = "create_game", skip(state, session))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(session): Json<NewSession>,
) -> Result<(StatusCode, Json<Game>), AppError> {
    info!(name = %session.name, participants = session.participants.len(), "Recording game session");

    let game = state.ledger.add_session(session).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// DELETE /games/:id
#[instrument(name = "delete_game", skip(state))]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<StatusCode, AppError> {
    state.ledger.delete_session(&game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /leaderboard
#[instrument(name = "leaderboard", skip(state))]
pub async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    Json(state.ledger.leaderboard().await)
}

/// POST /reset
#[instrument(name = "reset", skip(state))]
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.ledger.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}
