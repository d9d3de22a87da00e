//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::analysis::pipeline::run_analysis;
use crate::errors::AppError;
use crate::state::AppState;

/// The three output texts in display order.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub parsed_resume: String,
    pub parsed_job_description: String,
    pub ats_match_result: String,
}

/// POST /api/v1/analyze
///
/// Multipart form with a `resume` PDF part and a `job_description` text part.
/// Runs the full pipeline from scratch on every request; re-submitting simply
/// re-runs it with the current inputs.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume: Option<Bytes> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        // Copy the name out before consuming the field body.
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("resume") => {
                resume = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume upload: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("failed to read job description: {e}"))
                })?;
            }
            // Unknown fields are ignored rather than rejected.
            _ => {}
        }
    }

    let result = run_analysis(resume.as_deref(), &job_description, state.llm.as_ref()).await?;

    Ok(Json(AnalyzeResponse {
        parsed_resume: result.parsed_resume,
        parsed_job_description: result.parsed_job_description,
        ats_match_result: result.match_report,
    }))
}
