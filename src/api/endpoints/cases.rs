//! Case intake and history endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config::ScorerKind;
use crate::models::Case;
use crate::triage::{compute_triage, TriageResult};

/// Missing fields read as empty, like an unfilled form.
#[derive(Deserialize)]
pub struct CaseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Deserialize)]
pub struct CasesQuery {
    pub contact: Option<String>,
}

#[derive(Serialize)]
pub struct CasesResponse {
    pub cases: Vec<Case>,
    pub total: usize,
}

/// `POST /api/cases` — score the report and persist it as a case.
///
/// The configured scorer decides how the score is produced; either way
/// a case is recorded and returned with status 201.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(req): Json<CaseRequest>,
) -> Result<(StatusCode, Json<Case>), ApiError> {
    let result = score_request(&ctx, &req).await?;

    let case = Case {
        id: Uuid::new_v4(),
        name: req.name,
        age: req.age,
        contact: req.contact,
        description: req.description,
        severity: req.severity,
        symptoms: result.selected_symptoms.clone(),
        result,
        created_at: chrono::Utc::now(),
    };

    ctx.store.append(&case)?;
    tracing::info!(case_id = %case.id, priority = case.result.priority.as_str(), "case recorded");

    Ok((StatusCode::CREATED, Json(case)))
}

async fn score_request(ctx: &ApiContext, req: &CaseRequest) -> Result<TriageResult, ApiError> {
    match ctx.scorer {
        ScorerKind::Weighted => Ok(compute_triage(&ctx.catalogue, &req.severity, &req.symptoms)),
        ScorerKind::Assisted => {
            let classifier = ctx.classifier.clone();
            let catalogue = ctx.catalogue.clone();
            let severity = req.severity.clone();
            let symptoms = req.symptoms.clone();
            let description = req.description.clone();

            let classification = tokio::task::spawn_blocking(move || {
                classifier.classify(&catalogue, &severity, &symptoms, &description)
            })
            .await
            .map_err(|e| ApiError::Internal(format!("classifier task failed: {e}")))?;

            Ok(classification.result)
        }
    }
}

/// `GET /api/cases` — recorded cases, newest first. `?contact=` narrows
/// the listing to one patient's contact value.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<CasesQuery>,
) -> Result<Json<CasesResponse>, ApiError> {
    let cases = match query.contact {
        Some(contact) => ctx.store.list_by_contact(&contact)?,
        None => ctx.store.list_all()?,
    };

    let total = cases.len();
    Ok(Json(CasesResponse { cases, total }))
}

/// `DELETE /api/cases/:id` — 204 on success, 404 for unknown ids.
pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("Invalid case id".into()))?;

    if ctx.store.delete(&id)? {
        tracing::info!(case_id = %id, "case deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Case {id} not found")))
    }
}
