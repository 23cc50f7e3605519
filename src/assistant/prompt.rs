use crate::models::ChatRole;

use super::chat::ChatTurn;

pub const ASSESSMENT_SYSTEM_PROMPT: &str = r#"
You are a hospital triage assistant. Your ONLY role is to estimate how urgently
a patient needs care from their self-reported symptoms and route them to the
right department. You are NOT a doctor and your output is a routing aid, not a
diagnosis.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Respond with ONE JSON object matching the requested structure and nothing else.
2. "priority_color" MUST be exactly one of "Red", "Orange", "Yellow", "Green".
3. "score" MUST be a number from 1 to 10, where 10 is the most urgent.
4. Base the urgency ONLY on the reported symptoms, severity, and description.
5. NEVER prescribe. "medication_suggestions" may only name over-the-counter options.
6. "immediate_actions" lists concrete steps the patient can take right now.
7. Use plain, patient-friendly language in every text field. Keep fields short.
8. Always fill "disclaimer" with a reminder that this is not a medical diagnosis.
"#;

pub const CHAT_SYSTEM_PROMPT: &str = r#"
You are the triage desk assistant of a hospital's patient intake service. You
answer general questions about symptoms, self-care, and when to seek help. You
are NOT a doctor.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. NEVER diagnose, prescribe, or give treatment instructions.
2. If a message suggests an emergency (chest pain, trouble breathing, heavy
   bleeding, signs of stroke), tell the patient to call emergency services now.
3. For anything patient-specific, point the patient to the triage form or to a
   healthcare professional.
4. Use plain, calm language. Two to four sentences per answer.
5. If you do not know, say so clearly instead of guessing.
"#;

/// Build the assessment prompt for a single patient report.
pub fn build_assessment_prompt(severity: &str, symptoms: &[String], description: &str) -> String {
    let symptoms_line = if symptoms.is_empty() {
        "none selected".to_string()
    } else {
        symptoms.join(", ")
    };
    let description_line = if description.trim().is_empty() {
        "none provided"
    } else {
        description.trim()
    };

    format!(
        r#"<PATIENT_REPORT>
Reported severity: {severity}
Symptoms: {symptoms_line}
Description: {description_line}
</PATIENT_REPORT>

Assess the urgency of the above report and return ONLY this JSON structure:

```json
{{
  "priority_color": "Red | Orange | Yellow | Green",
  "score": 5,
  "summary": "One-sentence summary of the situation",
  "probable_diagnosis": "Most likely explanation, phrased cautiously",
  "risk_factors": "Relevant risk factors, or an empty string",
  "recommended_department": "Hospital department best suited for this patient",
  "medical_description": "Short clinical description of the presentation",
  "risk_explanation": "Plain-language explanation of the risk level",
  "immediate_actions": ["action1", "action2"],
  "medication_suggestions": ["over-the-counter option or none"],
  "disclaimer": "Reminder that this is not a medical diagnosis"
}}
```"#
    )
}

/// Build the chat prompt for MedGemma conversation.
pub fn build_chat_prompt(message: &str, history: &[ChatTurn]) -> String {
    let mut prompt = String::new();

    // Include recent turns (last 4) for context
    let recent: Vec<_> = history.iter().rev().take(4).rev().collect();
    if !recent.is_empty() {
        prompt.push_str("<CONVERSATION_HISTORY>\n");
        for turn in recent {
            let role = match turn.role {
                ChatRole::User => "Patient",
                ChatRole::Assistant => "Assistant",
            };
            prompt.push_str(&format!("{}: {}\n", role, turn.content));
        }
        prompt.push_str("</CONVERSATION_HISTORY>\n\n");
    }

    prompt.push_str(&format!("Patient message: {message}\n"));
    prompt
}
