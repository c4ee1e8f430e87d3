use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NoteInput, QaReport};

/// Errors that can occur when calling the generative-language provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Provider quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("Provider returned error: {0}")]
    Api(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Capability interface to the generative-language provider.
///
/// The HTTP layer only ever sees this trait, so an alternate provider can
/// be substituted without touching the endpoint or the schema types.
#[async_trait]
pub trait QaProvider: Send + Sync {
    /// Submit one clinical note for analysis and return the structured
    /// QA report, or a classified failure.
    async fn analyze(&self, note: &NoteInput) -> Result<QaReport, ProviderError>;
}
