use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::profile::validation::ValidationReport;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationReport),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),
}

/// `Json` extractor whose rejections use the `AppError` envelope instead of
/// axum's plain-text body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": {
                        "code": "NOT_FOUND",
                        "message": msg
                    }
                }),
            ),
            AppError::InvalidJson(rejection) => {
                tracing::debug!("Rejected request body: {rejection}");
                (
                    rejection.status(),
                    json!({
                        "error": {
                            "code": "INVALID_JSON",
                            "message": rejection.body_text()
                        }
                    }),
                )
            }
            AppError::Validation(report) => {
                tracing::debug!("Validation error: {report}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": {
                            "code": "VALIDATION_ERROR",
                            "message": report.to_string(),
                            "fields": report.fields(),
                            "details": report.errors
                        }
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
