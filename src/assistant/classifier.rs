use std::sync::Arc;

use crate::models::Priority;
use crate::triage::{self, guidance, SymptomCatalogue, TriageResult};

use super::assessment::{parse_assessment, AiAssessment};
use super::ollama::LlmClient;
use super::prompt;
use super::AssistantError;

/// Score reported whenever the model could not be consulted.
pub const FALLBACK_SCORE: f64 = 5.0;

/// How a classification was produced. `Fallback` keeps the underlying
/// failure for operator logs; callers only ever see the result.
#[derive(Debug)]
pub enum ClassificationSource {
    Model,
    Fallback(AssistantError),
}

/// Outcome of a delegated scoring run. Always carries a usable result.
#[derive(Debug)]
pub struct Classification {
    pub result: TriageResult,
    pub source: ClassificationSource,
}

impl Classification {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ClassificationSource::Fallback(_))
    }
}

/// Scorer that delegates urgency assessment to a language model.
#[derive(Clone)]
pub struct AiClassifier {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl AiClassifier {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Classify a patient report. Total: any failure between prompt and
    /// parse collapses into the fixed precautionary fallback, never an
    /// error. The failure itself is logged for operators.
    pub fn classify(
        &self,
        catalogue: &SymptomCatalogue,
        severity: &str,
        symptoms: &[String],
        description: &str,
    ) -> Classification {
        let selected = triage::selected_symptoms(catalogue, symptoms);

        match self.assess(severity, symptoms, description) {
            Ok(assessment) => {
                tracing::debug!(
                    color = ?assessment.priority_color,
                    score = assessment.score,
                    "model assessment accepted"
                );
                Classification {
                    result: repackage(assessment, selected),
                    source: ClassificationSource::Model,
                }
            }
            Err(error) => {
                tracing::warn!(%error, "assessment failed, serving fallback result");
                Classification {
                    result: fallback_result(selected),
                    source: ClassificationSource::Fallback(error),
                }
            }
        }
    }

    fn assess(
        &self,
        severity: &str,
        symptoms: &[String],
        description: &str,
    ) -> Result<AiAssessment, AssistantError> {
        let prompt = prompt::build_assessment_prompt(severity, symptoms, description);
        let response = self
            .client
            .generate(&self.model, &prompt, prompt::ASSESSMENT_SYSTEM_PROMPT)?;
        parse_assessment(&response)
    }
}

/// Repackage a model assessment into the shared result shape.
///
/// The colour decides the priority; the static guidance for that priority
/// fills every field the model left empty. Model text overrides the
/// instructions, next steps, and reassurance only where it was supplied.
fn repackage(assessment: AiAssessment, selected_symptoms: Vec<String>) -> TriageResult {
    let priority = assessment.priority_color.priority();
    let mut result = TriageResult::from_guidance(
        assessment.score,
        priority.clone(),
        guidance::for_priority(&priority),
        selected_symptoms,
    );

    if !assessment.immediate_actions.is_empty() {
        result.instructions = assessment.immediate_actions.clone();
    }
    let department = assessment.recommended_department.trim();
    if !department.is_empty() {
        result.next_steps = vec![format!("Go to the {department} department.")];
    }
    let risk = assessment.risk_explanation.trim();
    if !risk.is_empty() {
        result.reassurance = risk.to_string();
    }

    result.assessment = Some(assessment);
    result
}

/// The fixed answer served when the model cannot be used.
pub fn fallback_result(selected_symptoms: Vec<String>) -> TriageResult {
    TriageResult::from_guidance(
        FALLBACK_SCORE,
        Priority::Medium,
        &guidance::OFFLINE,
        selected_symptoms,
    )
}
