use serde::{Deserialize, Serialize};

use crate::models::domain::{LetterGrade, Severity};

/// One identified issue in a note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaFlag {
    pub severity: Severity,
    /// Why it matters
    pub issue: String,
    /// 1-2 sentences max
    pub suggested_edit: String,
}

/// Structured QA report for a single clinical note
///
/// Produced by the provider under a response schema; passed through to the
/// caller without semantic re-validation (the score is not re-checked
/// against the 0-100 range or the grade bands).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaReport {
    pub overall_score: i64,
    pub letter_grade: LetterGrade,
    pub flags: Vec<QaFlag>,
}

/// Liveness response for `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_parses_provider_shape() {
        let report: QaReport = serde_json::from_str(
            r#"{"overall_score":92,"letter_grade":"A+","flags":[{"severity":"minor","issue":"No exam findings documented.","suggested_edit":"Add the objective exam section."}]}"#,
        )
        .unwrap();
        assert_eq!(report.overall_score, 92);
        assert_eq!(report.letter_grade, LetterGrade::APlus);
        assert_eq!(report.flags.len(), 1);
        assert_eq!(report.flags[0].severity, Severity::Minor);
    }

    #[test]
    fn test_report_rejects_invalid_grade() {
        let result = serde_json::from_str::<QaReport>(
            r#"{"overall_score":50,"letter_grade":"E","flags":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_report_rejects_invalid_severity() {
        let result = serde_json::from_str::<QaReport>(
            r#"{"overall_score":70,"letter_grade":"C","flags":[{"severity":"urgent","issue":"x","suggested_edit":"y"}]}"#,
        );
        assert!(result.is_err());
    }
}
