use serde::{Deserialize, Serialize};

use crate::models::Priority;

use super::AssistantError;

/// Urgency colour reported by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl PriorityColor {
    /// Red means immediate attention; Orange and Yellow both mean prompt
    /// consultation; Green means self-care.
    pub fn priority(&self) -> Priority {
        match self {
            PriorityColor::Red => Priority::High,
            PriorityColor::Orange | PriorityColor::Yellow => Priority::Medium,
            PriorityColor::Green => Priority::Low,
        }
    }
}

/// Structured assessment returned by the model. `priority_color` and
/// `score` are required; every narrative field defaults to empty when the
/// model leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAssessment {
    pub priority_color: PriorityColor,
    pub score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub probable_diagnosis: String,
    #[serde(default)]
    pub risk_factors: String,
    #[serde(default)]
    pub recommended_department: String,
    #[serde(default)]
    pub medical_description: String,
    #[serde(default)]
    pub risk_explanation: String,
    #[serde(default)]
    pub immediate_actions: Vec<String>,
    #[serde(default)]
    pub medication_suggestions: Vec<String>,
    #[serde(default)]
    pub disclaimer: String,
}

/// Parse the model's response into an assessment.
///
/// Models are told to answer with bare JSON but often wrap it in a
/// ```json fence anyway; both forms are accepted. Anything else fails.
pub fn parse_assessment(response: &str) -> Result<AiAssessment, AssistantError> {
    let json_str = extract_json(response)?;

    let assessment: AiAssessment = serde_json::from_str(json_str.trim())
        .map_err(|e| AssistantError::JsonParsing(e.to_string()))?;

    if !(1.0..=10.0).contains(&assessment.score) {
        return Err(AssistantError::InvalidAssessment(format!(
            "score {} outside the 1-10 scale",
            assessment.score
        )));
    }

    Ok(assessment)
}

fn extract_json(response: &str) -> Result<&str, AssistantError> {
    match response.find("```json") {
        Some(json_start) => {
            let json_content_start = json_start + 7;
            let json_end = response[json_content_start..]
                .find("```")
                .ok_or_else(|| AssistantError::MalformedResponse("Unclosed JSON block".into()))?;
            Ok(&response[json_content_start..json_content_start + json_end])
        }
        None => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
        "priority_color": "Orange",
        "score": 6,
        "summary": "Chest pain needing prompt review",
        "probable_diagnosis": "Possible angina",
        "risk_factors": "Age, reported smoking",
        "recommended_department": "Cardiology",
        "medical_description": "Acute chest pain with dizziness",
        "risk_explanation": "Chest pain can signal a heart problem and should be checked soon.",
        "immediate_actions": ["Sit down and rest", "Avoid exertion"],
        "medication_suggestions": ["None until seen by a clinician"],
        "disclaimer": "This is not a medical diagnosis."
    }"#;

    #[test]
    fn parses_bare_json() {
        let assessment = parse_assessment(VALID_JSON).unwrap();
        assert_eq!(assessment.priority_color, PriorityColor::Orange);
        assert_eq!(assessment.score, 6.0);
        assert_eq!(assessment.recommended_department, "Cardiology");
        assert_eq!(assessment.immediate_actions.len(), 2);
    }

    #[test]
    fn parses_fenced_json_with_surrounding_prose() {
        let response = format!("Here is my assessment:\n```json\n{VALID_JSON}\n```\nStay safe!");
        let assessment = parse_assessment(&response).unwrap();
        assert_eq!(assessment.priority_color, PriorityColor::Orange);
    }

    #[test]
    fn unclosed_fence_is_malformed() {
        let response = format!("```json\n{VALID_JSON}");
        let err = parse_assessment(&response).unwrap_err();
        assert!(matches!(err, AssistantError::MalformedResponse(_)));
    }

    #[test]
    fn narrative_fields_default_to_empty() {
        let assessment =
            parse_assessment(r#"{"priority_color": "Green", "score": 2}"#).unwrap();
        assert_eq!(assessment.summary, "");
        assert!(assessment.immediate_actions.is_empty());
        assert!(assessment.medication_suggestions.is_empty());
    }

    #[test]
    fn missing_required_field_fails() {
        let err = parse_assessment(r#"{"score": 5}"#).unwrap_err();
        assert!(matches!(err, AssistantError::JsonParsing(_)));
    }

    #[test]
    fn unknown_colour_fails() {
        let err = parse_assessment(r#"{"priority_color": "Purple", "score": 5}"#).unwrap_err();
        assert!(matches!(err, AssistantError::JsonParsing(_)));
    }

    #[test]
    fn lowercase_colour_fails() {
        let err = parse_assessment(r#"{"priority_color": "red", "score": 5}"#).unwrap_err();
        assert!(matches!(err, AssistantError::JsonParsing(_)));
    }

    #[test]
    fn score_outside_scale_is_invalid() {
        let low = parse_assessment(r#"{"priority_color": "Red", "score": 0}"#).unwrap_err();
        assert!(matches!(low, AssistantError::InvalidAssessment(_)));

        let high = parse_assessment(r#"{"priority_color": "Red", "score": 11}"#).unwrap_err();
        assert!(matches!(high, AssistantError::InvalidAssessment(_)));
    }

    #[test]
    fn prose_without_json_fails() {
        let err = parse_assessment("I think the patient should see a doctor.").unwrap_err();
        assert!(matches!(err, AssistantError::JsonParsing(_)));
    }

    #[test]
    fn colour_to_priority_mapping() {
        assert_eq!(PriorityColor::Red.priority(), Priority::High);
        assert_eq!(PriorityColor::Orange.priority(), Priority::Medium);
        assert_eq!(PriorityColor::Yellow.priority(), Priority::Medium);
        assert_eq!(PriorityColor::Green.priority(), Priority::Low);
    }
}
