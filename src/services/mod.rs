// Service exports
pub mod gemini;
pub mod provider;

pub use gemini::GeminiClient;
pub use provider::{ProviderError, QaProvider};
