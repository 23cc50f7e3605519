use serde::{Deserialize, Serialize};

use crate::assistant::AiAssessment;
use crate::models::Priority;

use super::guidance::PriorityGuidance;

/// Scoring output shared by both scorer variants.
///
/// `selected_symptoms` holds the catalogue names that resolved from the
/// request, in first-occurrence order with duplicates removed.
/// `assessment` is present only when the delegated scorer produced a
/// model answer; the deterministic scorer and the fallback leave it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResult {
    pub score: f64,
    pub priority: Priority,
    pub color: String,
    pub label: String,
    pub instructions: Vec<String>,
    pub next_steps: Vec<String>,
    pub reassurance: String,
    pub selected_symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<AiAssessment>,
}

impl TriageResult {
    /// Assemble a result carrying the given guidance bundle's text.
    pub fn from_guidance(
        score: f64,
        priority: Priority,
        guidance: &PriorityGuidance,
        selected_symptoms: Vec<String>,
    ) -> Self {
        Self {
            score,
            priority,
            color: guidance.color.to_string(),
            label: guidance.label.to_string(),
            instructions: guidance.instructions.iter().map(|s| s.to_string()).collect(),
            next_steps: guidance.next_steps.iter().map(|s| s.to_string()).collect(),
            reassurance: guidance.reassurance.to_string(),
            selected_symptoms,
            assessment: None,
        }
    }
}
