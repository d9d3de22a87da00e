#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The two missing-input variants are deliberately separate: the UI surfaces a
/// distinct message per missing field. All errors are local to one analysis
/// run; nothing here touches process-wide state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume was uploaded")]
    MissingResume,

    #[error("The job description is empty")]
    MissingJobDescription,

    #[error("The uploaded file could not be read as a PDF: {0}")]
    DocumentUnreadable(String),

    #[error("Completion service unavailable: {0}")]
    CompletionUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingResume => (
                StatusCode::BAD_REQUEST,
                "MISSING_RESUME",
                "Please upload a resume (PDF)".to_string(),
            ),
            AppError::MissingJobDescription => (
                StatusCode::BAD_REQUEST,
                "MISSING_JOB_DESCRIPTION",
                "Please paste a job description".to_string(),
            ),
            AppError::DocumentUnreadable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_UNREADABLE",
                format!("The uploaded file could not be read as a PDF: {msg}"),
            ),
            AppError::CompletionUnavailable(msg) => {
                tracing::error!("Completion error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_UNAVAILABLE",
                    format!("Analysis failed: {msg}"),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
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
