use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::triage::TriageResult;

/// One stored triage submission. Created at intake, optionally deleted by
/// staff, never updated in place.
///
/// `severity` is kept exactly as the patient reported it, even when it is
/// not a recognised severity level. `symptoms` holds only names that
/// resolved against the catalogue at intake time. The full scoring output
/// is embedded as `result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: Uuid,
    pub name: String,
    pub age: Option<u32>,
    pub contact: String,
    pub description: String,
    pub severity: String,
    pub symptoms: Vec<String>,
    pub result: TriageResult,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::triage::{self, SymptomCatalogue};

    fn sample_case() -> Case {
        let catalogue = SymptomCatalogue::bundled();
        let symptoms = vec!["Fatigue".to_string()];
        let result = triage::compute_triage(&catalogue, "Mild", &symptoms);
        Case {
            id: Uuid::new_v4(),
            name: "Ada Perez".into(),
            age: Some(34),
            contact: "ada@example.com".into(),
            description: "Tired for two days".into(),
            severity: "Mild".into(),
            symptoms: result.selected_symptoms.clone(),
            result,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn case_serializes_with_embedded_result() {
        let case = sample_case();
        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["severity"], "Mild");
        assert_eq!(json["result"]["priority"], "Low");
        assert_eq!(json["result"]["score"], 1.0);
    }

    #[test]
    fn case_round_trips_through_json() {
        let case = sample_case();
        let json = serde_json::to_string(&case).unwrap();
        let back: Case = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, case.id);
        assert_eq!(back.result.priority, Priority::Low);
        assert_eq!(back.symptoms, vec!["Fatigue".to_string()]);
    }
}
