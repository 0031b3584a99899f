use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::instrument;

use super::service::{ImportSummary, TransferService};
use crate::shared::{AppError, AppState};

/// GET /export
///
/// Returns the whole scoreboard as a JSON document
#[instrument(name = "export_scoreboard", skip(state))]
pub async fn export_scoreboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TransferService::new(Arc::clone(&state.ledger));
    let document = service.export().await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}

/// POST /import
///
/// Body is a previously exported document. Replaces roster and game log.
#[instrument(name = "import_scoreboard", skip(state, body))]
pub async fn import_scoreboard(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>, AppError> {
    let service = TransferService::new(Arc::clone(&state.ledger));
    Ok(Json(service.import(&body).await?))
}
