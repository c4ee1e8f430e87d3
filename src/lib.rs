//! Clinical QA Engine - structured quality assessment for clinical notes
//!
//! This library wires a thin HTTP surface to a generative-language provider:
//! a note goes in, a schema-constrained QA report (score, letter grade,
//! flagged issues) comes back. All clinical reasoning is delegated to the
//! provider; this crate owns the request/response contract and the failure
//! classification.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::AuditPrompt;
pub use crate::models::{LetterGrade, NoteInput, QaFlag, QaReport, Severity};
pub use crate::services::{GeminiClient, ProviderError, QaProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let prompt = AuditPrompt::clinical_default();
        assert!(prompt.instructions.contains("Clinical Quality Assurance Auditor"));
    }
}
