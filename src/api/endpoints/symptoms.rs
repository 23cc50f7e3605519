//! Symptom catalogue endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::triage::SymptomEntry;

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub version: u32,
    pub symptoms: Vec<SymptomEntry>,
}

/// `GET /api/symptoms` — the catalogue clients build their pickers from.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<SymptomsResponse>, ApiError> {
    Ok(Json(SymptomsResponse {
        version: ctx.catalogue.version(),
        symptoms: ctx.catalogue.entries().to_vec(),
    }))
}
