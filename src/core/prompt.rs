use serde_json::{json, Value};

use crate::models::NoteInput;

/// System instruction for the clinical auditor persona, including the
/// scoring rubric the letter grades are drawn from.
const AUDITOR_INSTRUCTIONS: &str = "\
You are an expert Clinical Quality Assurance Auditor. Your task is to review clinical notes for defensibility, accuracy, and professional tone.

CORE CLINICAL RULES:
1. NO FABRICATION: Do not invent clinical findings not present in the note.
2. MINIMAL EDITS: Suggested edits must be concise and improve defensibility without rewriting the whole note.
3. GAP IDENTIFICATION: If key information is missing (dates, specific exam findings), flag it as missing.
4. NEUTRALITY: Ensure language is neutral. Replace subjective clinician bias (e.g., \"patient is lazy\") with objective observations (e.g., \"patient's self-reported activity level is low\").
5. SEPARATION: Maintain clear distinction between patient-reported history (Subjective) and clinician findings (Objective).

SCORING CRITERIA:
- 90-100 (A+): Defensible, objective, complete.
- 80-89 (A/B): Minor documentation gaps.
- 70-79 (C): Major issues, biased language, or missing critical sections.
- <70 (D): Critical errors or high legal risk.";

/// Instruction text plus the provider-facing response schema, bundled as
/// data so the adapter can be exercised against alternative prompts in
/// tests and the rubric can be versioned independently of transport code.
#[derive(Debug, Clone)]
pub struct AuditPrompt {
    pub instructions: String,
    pub response_schema: Value,
}

impl AuditPrompt {
    /// The clinical QA rubric used in production
    pub fn clinical_default() -> Self {
        Self {
            instructions: AUDITOR_INSTRUCTIONS.to_string(),
            response_schema: report_schema(),
        }
    }

    /// Build the user message for a note.
    ///
    /// Only the note body is forwarded. TODO: include note_type,
    /// date_of_service, and date_of_injury once the rubric is extended to
    /// reference them explicitly; they are accepted on input today but the
    /// auditor never sees them.
    pub fn user_message(&self, input: &NoteInput) -> String {
        format!("Note Content: {}", input.note)
    }
}

/// Response schema in the Gemini structured-output dialect, constraining
/// the model to the QA report shape.
fn report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overall_score": {
                "type": "INTEGER",
                "description": "Score from 0 to 100"
            },
            "letter_grade": {
                "type": "STRING",
                "enum": ["A+", "A", "B", "C", "D"]
            },
            "flags": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "severity": {
                            "type": "STRING",
                            "enum": ["critical", "major", "minor"]
                        },
                        "issue": {
                            "type": "STRING",
                            "description": "Why it matters"
                        },
                        "suggested_edit": {
                            "type": "STRING",
                            "description": "1-2 sentences max"
                        }
                    },
                    "required": ["severity", "issue", "suggested_edit"]
                }
            }
        },
        "required": ["overall_score", "letter_grade", "flags"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NoteInput {
        NoteInput {
            note: "Patient reports mild pain.".to_string(),
            note_type: "progress".to_string(),
            date_of_service: "2024-01-01".to_string(),
            date_of_injury: "2023-12-01".to_string(),
        }
    }

    #[test]
    fn test_user_message_carries_note_body_only() {
        let prompt = AuditPrompt::clinical_default();
        let message = prompt.user_message(&sample_input());

        assert_eq!(message, "Note Content: Patient reports mild pain.");
        assert!(!message.contains("2024-01-01"));
        assert!(!message.contains("progress"));
    }

    #[test]
    fn test_instructions_embed_rules_and_rubric() {
        let prompt = AuditPrompt::clinical_default();

        assert!(prompt.instructions.contains("NO FABRICATION"));
        assert!(prompt.instructions.contains("MINIMAL EDITS"));
        assert!(prompt.instructions.contains("GAP IDENTIFICATION"));
        assert!(prompt.instructions.contains("NEUTRALITY"));
        assert!(prompt.instructions.contains("SEPARATION"));
        assert!(prompt.instructions.contains("90-100 (A+)"));
        assert!(prompt.instructions.contains("<70 (D)"));
    }

    #[test]
    fn test_schema_constrains_grades_and_severities() {
        let schema = report_schema();

        let grades = schema["properties"]["letter_grade"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(grades.len(), 5);
        assert!(grades.contains(&serde_json::json!("A+")));

        let severities = schema["properties"]["flags"]["items"]["properties"]["severity"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(severities.len(), 3);

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
    }
}
