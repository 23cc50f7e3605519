//! Scoring endpoints.
//!
//! Two routes share one request shape:
//! - `POST /api/triage` — deterministic weighted scorer
//! - `POST /api/triage/assess` — delegated scorer (falls back on failure)

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::triage::{compute_triage, TriageResult};

/// Missing fields read as empty, like an unfilled form.
#[derive(Deserialize)]
pub struct TriageRequest {
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// `POST /api/triage` — deterministic score from the symptom catalogue.
pub async fn score(
    State(ctx): State<ApiContext>,
    Json(req): Json<TriageRequest>,
) -> Result<Json<TriageResult>, ApiError> {
    Ok(Json(compute_triage(
        &ctx.catalogue,
        &req.severity,
        &req.symptoms,
    )))
}

/// `POST /api/triage/assess` — model-backed assessment.
///
/// The classifier blocks on the model call, so it runs on the blocking
/// pool. Its fallback contract means this route answers 200 even with
/// the model down.
pub async fn assess(
    State(ctx): State<ApiContext>,
    Json(req): Json<TriageRequest>,
) -> Result<Json<TriageResult>, ApiError> {
    let classifier = ctx.classifier.clone();
    let catalogue = ctx.catalogue.clone();

    let classification = tokio::task::spawn_blocking(move || {
        classifier.classify(&catalogue, &req.severity, &req.symptoms, &req.description)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("classifier task failed: {e}")))?;

    Ok(Json(classification.result))
}
