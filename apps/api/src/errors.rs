use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::layout::LayoutError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Layout(e @ LayoutError::InfeasibleLayout { .. }) => {
                tracing::warn!("Infeasible layout: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INFEASIBLE_LAYOUT",
                    e.to_string(),
                )
            }
            AppError::Layout(e @ LayoutError::UnsupportedGroupCount { .. }) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_GROUP_COUNT",
                e.to_string(),
            ),
            AppError::Layout(e @ LayoutError::InvalidArrangementType(_)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARRANGEMENT_TYPE",
                e.to_string(),
            ),
            AppError::Layout(e @ LayoutError::InvalidCanvas { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_CANVAS", e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
