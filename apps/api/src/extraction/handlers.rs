//! Axum route handlers for document extraction.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::pdf::extract_text_from_pdf;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// POST /extract
///
/// Multipart upload of a PDF (field `resume`, or the first field carrying a file).
/// Returns the plain text to paste into a `/score` request.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some("resume") && field.file_name().is_none() {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&bytes))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

        info!(text_chars = text.len(), "PDF text extracted");
        return Ok(Json(ExtractResponse { text }));
    }

    Err(AppError::Validation(
        "Please upload a resume PDF in the 'resume' field.".to_string(),
    ))
}
