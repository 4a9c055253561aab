//! Axum route handlers for the scoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::ats::pipeline::AtsReport;
use crate::errors::AppError;
use crate::state::AppState;

const MISSING_INPUT_MESSAGE: &str = "Please provide both Job Description and Resume.";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job_desc: Option<String>,
    pub resume_text: Option<String>,
}

impl ScoreRequest {
    /// Both fields must be present and contain something other than whitespace.
    fn validated(&self) -> Result<(&str, &str), AppError> {
        match (non_blank(&self.resume_text), non_blank(&self.job_desc)) {
            (Some(resume), Some(job)) => Ok((resume, job)),
            _ => Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string())),
        }
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /score
///
/// Full pipeline: summarize resume ∥ job description → LLM score → keyword gap.
/// Returns `{ ats_result, match_percentage, missing_keywords }`.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<AtsReport>, AppError> {
    let Json(request) = payload?;
    let (resume_text, job_desc) = request.validated()?;

    let span = info_span!("score", request_id = %Uuid::new_v4());
    async move {
        info!(
            resume_chars = resume_text.len(),
            job_desc_chars = job_desc.len(),
            "Scoring request accepted"
        );
        let report = state.pipeline.run(resume_text, job_desc).await?;
        Ok::<_, AppError>(Json(report))
    }
    .instrument(span)
    .await
}
