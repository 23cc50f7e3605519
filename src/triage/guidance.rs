use crate::models::Priority;

/// Static guidance bundle shown to the patient alongside the score.
#[derive(Debug)]
pub struct PriorityGuidance {
    pub color: &'static str,
    pub label: &'static str,
    pub instructions: &'static [&'static str],
    pub next_steps: &'static [&'static str],
    pub reassurance: &'static str,
}

static HIGH: PriorityGuidance = PriorityGuidance {
    color: "red",
    label: "High Priority - Immediate Attention Required",
    instructions: &[
        "Seek immediate medical attention - call emergency services or go to the nearest emergency room.",
        "Do NOT drive yourself; ask someone to take you or call an ambulance.",
        "If experiencing chest pain, sit upright and stay as calm as possible while waiting for help.",
        "If there is active bleeding, apply firm pressure with a clean cloth.",
        "Do not eat or drink anything until assessed by a medical professional.",
    ],
    next_steps: &[
        "Proceed to the nearest Emergency Room immediately.",
        "Carry a list of current medications and allergies with you.",
        "Inform the ER staff of all symptoms listed above.",
    ],
    reassurance: "We understand this may feel overwhelming, but you are doing the right thing by seeking help. \
        Emergency teams are trained to handle situations exactly like yours. Stay as calm as you can - help is available.",
};

static MEDIUM: PriorityGuidance = PriorityGuidance {
    color: "orange",
    label: "Medium Priority - Prompt Medical Consultation Advised",
    instructions: &[
        "Schedule an urgent appointment with your doctor or visit an urgent-care clinic today.",
        "Stay hydrated - drink small sips of water or an electrolyte solution.",
        "Monitor your temperature every 2 hours if you have a fever.",
        "Rest in a comfortable, well-ventilated area.",
        "Avoid strenuous physical activity until evaluated.",
    ],
    next_steps: &[
        "Contact your primary-care physician within the next few hours.",
        "If symptoms worsen before your appointment, go to the Emergency Room.",
        "Keep a written log of symptom changes to share with your doctor.",
    ],
    reassurance: "Your symptoms warrant professional attention, but they do not appear to be immediately life-threatening. \
        Getting checked promptly is the best course of action. You are taking good care of yourself.",
};

static LOW: PriorityGuidance = PriorityGuidance {
    color: "green",
    label: "Low Priority - Self-Care & Monitoring",
    instructions: &[
        "Your symptoms suggest a low level of urgency at this time.",
        "Stay hydrated and get plenty of rest.",
        "Take over-the-counter medications for symptom relief as appropriate (e.g., paracetamol for mild fever).",
        "Eat light, nutritious meals to support recovery.",
        "Avoid caffeine, alcohol, and heavy foods.",
    ],
    next_steps: &[
        "Monitor your symptoms over the next 24-48 hours.",
        "Schedule a routine check-up with your doctor if symptoms persist beyond 48 hours.",
        "Return here or call a health helpline if new or worsening symptoms develop.",
    ],
    reassurance: "It's great that you're paying attention to how you feel. Based on the information provided, \
        rest and self-care should help you recover. Don't hesitate to seek medical advice if anything changes.",
};

/// Served when the delegated scorer cannot complete an assessment.
/// Medium colour and label with messaging that names the precaution.
pub static OFFLINE: PriorityGuidance = PriorityGuidance {
    color: "orange",
    label: "Medium Priority - Prompt Medical Consultation Advised",
    instructions: &[
        "The automated assessment service is unavailable, so your report was given a standard precautionary rating.",
        "Monitor your symptoms closely and rest while you wait.",
        "If symptoms worsen or you feel unwell, contact your doctor or visit an urgent-care clinic.",
    ],
    next_steps: &[
        "Try the assessment again in a few minutes.",
        "Contact your primary-care physician if you are concerned.",
        "Go to the Emergency Room immediately if symptoms become severe.",
    ],
    reassurance: "A precautionary rating was applied because the automated assessment could not be completed. \
        This does not mean your condition is serious. When in doubt, speak to a medical professional.",
};

pub fn for_priority(priority: &Priority) -> &'static PriorityGuidance {
    match priority {
        Priority::High => &HIGH,
        Priority::Medium => &MEDIUM,
        Priority::Low => &LOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_match_priorities() {
        assert_eq!(for_priority(&Priority::High).color, "red");
        assert_eq!(for_priority(&Priority::Medium).color, "orange");
        assert_eq!(for_priority(&Priority::Low).color, "green");
    }

    #[test]
    fn labels_name_their_priority() {
        assert!(for_priority(&Priority::High).label.starts_with("High Priority"));
        assert!(for_priority(&Priority::Medium).label.starts_with("Medium Priority"));
        assert!(for_priority(&Priority::Low).label.starts_with("Low Priority"));
    }

    #[test]
    fn every_bundle_is_complete() {
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            let guidance = for_priority(&priority);
            assert_eq!(guidance.instructions.len(), 5);
            assert_eq!(guidance.next_steps.len(), 3);
            assert!(!guidance.reassurance.is_empty());
        }
    }

    #[test]
    fn offline_bundle_keeps_medium_presentation() {
        assert_eq!(OFFLINE.color, "orange");
        assert_eq!(OFFLINE.label, for_priority(&Priority::Medium).label);
        assert!(OFFLINE.instructions[0].contains("unavailable"));
    }
}
