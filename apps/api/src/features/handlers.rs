//! Axum route handlers for the Features API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::features::classifier::classify;
use crate::features::models::{CandidateFeatures, FeatureField};
use crate::features::review::{review, FeatureOverrides};
use crate::state::AppState;

/// Multipart field carrying the résumé.
const DOCUMENT_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub features: CandidateFeatures,
    pub missing_fields: Vec<FeatureField>,
    /// Length of the extracted text; 0 usually means a scanned, image-only PDF.
    pub text_chars: usize,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyTextResponse {
    pub features: CandidateFeatures,
    pub missing_fields: Vec<FeatureField>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub features: CandidateFeatures,
    #[serde(default)]
    pub overrides: FeatureOverrides,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub features: CandidateFeatures,
    pub missing_fields: Vec<FeatureField>,
    pub complete: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Extracts text from an uploaded PDF and classifies it. Classification only
/// runs once extraction has fully succeeded.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let document = read_document(&mut multipart).await?;
    let document_bytes = document.len();

    let extractor = state.extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    let features = classify(&text);
    let text_chars = text.chars().count();
    info!(
        document_bytes,
        text_chars,
        title = %features.general_title,
        seniority = %features.seniority_level,
        "Parsed resume"
    );

    Ok(Json(ParseResumeResponse {
        missing_fields: features.missing_fields(),
        features,
        text_chars,
    }))
}

/// POST /api/v1/features/classify
///
/// Classifies already-extracted text. Empty text is valid and yields defaults.
pub async fn handle_classify_text(
    Json(request): Json<ClassifyTextRequest>,
) -> Json<ClassifyTextResponse> {
    let features = classify(&request.text);
    Json(ClassifyTextResponse {
        missing_fields: features.missing_fields(),
        features,
    })
}

/// POST /api/v1/features/review
///
/// Applies the user's corrections and reports what is still missing.
pub async fn handle_review(
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let features = review(request.features, &request.overrides)?;
    Ok(Json(ReviewResponse {
        missing_fields: features.missing_fields(),
        complete: features.is_complete(),
        features,
    }))
}

async fn read_document(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(DOCUMENT_FIELD) {
            return Ok(field.bytes().await?);
        }
    }
    Err(AppError::Validation(format!(
        "multipart field '{DOCUMENT_FIELD}' is required"
    )))
}
