// Core exports
pub mod prompt;

pub use prompt::AuditPrompt;
