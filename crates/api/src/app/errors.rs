use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use tilestock_core::DomainError;
use tilestock_store::StoreError;

/// Handler-level error, rendered as `{ "error": code, "message": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(DomainError::Validation(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            ApiError::Domain(DomainError::InvalidValue(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "invalid_value", msg)
            }
            ApiError::Domain(e @ DomainError::NotFound { .. }) => {
                json_error(StatusCode::NOT_FOUND, "not_found", e.to_string())
            }
            ApiError::Store(e @ StoreError::IdSpaceExhausted { .. }) => {
                tracing::error!(error = %e, "record id space exhausted");
                json_error(StatusCode::INSUFFICIENT_STORAGE, "id_space_exhausted", e.to_string())
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "record store unavailable");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
