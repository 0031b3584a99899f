use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::catalog::{CatalogError, CatalogService};
use crate::ledger::{LedgerError, LedgerService};
use crate::store::StoreError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<LedgerService>,
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(ledger: Arc<LedgerService>, catalog: Arc<CatalogService>) -> Self {
        Self { ledger, catalog }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::InvalidName
            | LedgerError::InsufficientParticipants { .. }
            | LedgerError::UnknownPlayer(_) => AppError::BadRequest(message),
            LedgerError::DuplicateGameName(_) | LedgerError::DuplicatePlayerName(_) => {
                AppError::Conflict(message)
            }
            LedgerError::NotFound(_) => AppError::NotFound(message),
            LedgerError::ImportDecode(_)
            | LedgerError::InvalidDocument(_)
            | LedgerError::UnsupportedVersion { .. } => AppError::Unprocessable(message),
            LedgerError::ExportEncode(_) | LedgerError::Store(_) => AppError::Storage(message),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidName | CatalogError::MissingUsername => {
                AppError::BadRequest(message)
            }
            CatalogError::DuplicateEntry(_) => AppError::Conflict(message),
            CatalogError::NotFound(_) => AppError::NotFound(message),
            CatalogError::Http(_)
            | CatalogError::UnexpectedStatus(_)
            | CatalogError::StillProcessing { .. }
            | CatalogError::Parse(_) => AppError::Upstream(message),
            CatalogError::Store(_) => AppError::Storage(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) => {
                error!(error = %self, "Request failed on storage");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
