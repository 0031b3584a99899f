use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::{
    errors::CatalogError,
    models::{CatalogEntry, CatalogSync},
    types::{CreateEntryRequest, UsernamePayload},
};
use crate::shared::{AppError, AppState};

/// GET /catalog
#[instrument(name = "list_catalog", skip(state))]
pub async fn list_catalog(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.list().await)
}

/// POST /catalog
#[instrument(name = "create_catalog_entry", skip(state))]
pub async fn create_catalog_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<CatalogEntry>), AppError> {
    let entry = state.catalog.add_entry(&request.name).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /catalog/:id
#[instrument(name = "delete_catalog_entry", skip(state))]
pub async fn delete_catalog_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete_entry(&entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /catalog/sync
///
/// Uses the username in the body, falling back to the saved preference
#[instrument(name = "sync_catalog", skip(state))]
pub async fn sync_catalog(
    State(state): State<AppState>,
    Json(request): Json<UsernamePayload>,
) -> Result<Json<CatalogSync>, AppError> {
    let username = match request.username {
        Some(username) => username,
        None => state
            .catalog
            .username()
            .await?
            .ok_or(CatalogError::MissingUsername)?,
    };

    info!(username = %username, "Syncing catalog");
    Ok(Json(state.catalog.sync(&username).await?))
}

/// GET /settings/bgg-username
pub async fn get_username(State(state): State<AppState>) -> Result<Json<UsernamePayload>, AppError> {
    Ok(Json(UsernamePayload {
        username: state.catalog.username().await?,
    }))
}

/// PUT /settings/bgg-username
#[instrument(name = "set_username", skip(state))]
pub async fn set_username(
    State(state): State<AppState>,
    Json(request): Json<UsernamePayload>,
) -> Result<StatusCode, AppError> {
    let username = request.username.ok_or(CatalogError::MissingUsername)?;
    state.catalog.set_username(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}
