use serde::{Deserialize, Serialize};

/// Inbound clinical note payload
///
/// All four fields are required strings; a missing, null, or non-string
/// field is rejected at deserialization. No length, date-format, or content
/// validation is applied — gaps like missing dates are the auditor's job to
/// flag, not an input error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteInput {
    pub note: String,
    pub note_type: String,
    pub date_of_service: String,
    pub date_of_injury: String,
}
