// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{LetterGrade, Severity};
pub use requests::NoteInput;
pub use responses::{ErrorResponse, HealthResponse, QaFlag, QaReport};
