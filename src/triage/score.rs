use std::str::FromStr;

use crate::models::{Priority, Severity};

use super::catalogue::SymptomCatalogue;
use super::guidance;
use super::types::TriageResult;

/// Deterministic weighted-table scorer.
///
/// Total by construction: unknown symptom names contribute nothing and
/// an unrecognised severity falls back to a 1.0 multiplier. Duplicate
/// names add their weight once per occurrence.
pub fn compute_triage(
    catalogue: &SymptomCatalogue,
    severity: &str,
    symptoms: &[String],
) -> TriageResult {
    let parsed = Severity::from_str(severity).ok();
    let multiplier = parsed.as_ref().map(Severity::multiplier).unwrap_or(1.0);
    let severe = parsed == Some(Severity::Severe);

    let mut raw: u32 = 0;
    let mut has_critical = false;
    for entry in symptoms.iter().filter_map(|name| catalogue.lookup(name)) {
        raw += entry.weight;
        has_critical |= entry.critical;
    }

    let score = round1(raw as f64 * multiplier);
    let priority = priority_for(score, severe, has_critical);
    let selected = selected_symptoms(catalogue, symptoms);

    TriageResult::from_guidance(score, priority.clone(), guidance::for_priority(&priority), selected)
}

/// Resolved catalogue names in first-occurrence order, deduplicated.
pub fn selected_symptoms(catalogue: &SymptomCatalogue, symptoms: &[String]) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();
    for name in symptoms {
        if catalogue.lookup(name).is_some() && !selected.contains(name) {
            selected.push(name.clone());
        }
    }
    selected
}

/// Score bucketing. Severe severity with any critical symptom escalates
/// to High regardless of the numeric score.
pub fn priority_for(score: f64, severe: bool, has_critical: bool) -> Priority {
    if severe && has_critical {
        return Priority::High;
    }
    if score >= 7.0 {
        Priority::High
    } else if score >= 4.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
