use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kintree_core::error::CoreError;
use serde::Serialize;

/// Error type returned by every handler.
///
/// Converts into the service's JSON error bodies via [`IntoResponse`]:
/// domain errors keep their status and message, storage errors are
/// sanitized to a generic 500 unless they signal a missing row.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error bubbled up from `kintree_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure from the data layer.
    #[error("storage error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result alias used throughout the handlers.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body: `{"message": ..., "field": ...}`.
///
/// `field` is present only when a single input field is at fault.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    ErrorBody::new(format!("{entity} not found")),
                ),
                CoreError::Validation { message, field } => (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        message: message.clone(),
                        field: *field,
                    },
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Unhandled domain error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorBody::new("An internal error occurred"),
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and error body.
///
/// `RowNotFound` maps to 404; everything else maps to 500 with a
/// sanitized message, logging the real error server-side.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            ErrorBody::new("Family member not found"),
        ),
        other => {
            tracing::error!(error = %other, "Query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("An internal error occurred"),
            )
        }
    }
}
