use serde::{Deserialize, Serialize};

/// Severity of a flagged issue in a clinical note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

/// Letter grade assigned by the auditor rubric
///
/// The provider is asked to emit exactly one of these five values; anything
/// else fails deserialization and is treated as a provider contract breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_wire_values() {
        assert_eq!(serde_json::to_string(&LetterGrade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&LetterGrade::D).unwrap(), "\"D\"");

        let grade: LetterGrade = serde_json::from_str("\"A+\"").unwrap();
        assert_eq!(grade, LetterGrade::APlus);
    }

    #[test]
    fn test_letter_grade_rejects_unknown_value() {
        assert!(serde_json::from_str::<LetterGrade>("\"F\"").is_err());
        assert!(serde_json::from_str::<LetterGrade>("\"a+\"").is_err());
    }

    #[test]
    fn test_severity_wire_values() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");

        let severity: Severity = serde_json::from_str("\"minor\"").unwrap();
        assert_eq!(severity, Severity::Minor);

        assert!(serde_json::from_str::<Severity>("\"catastrophic\"").is_err());
    }
}
