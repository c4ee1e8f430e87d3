use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::AuditPrompt;
use crate::models::{NoteInput, QaReport};
use crate::services::provider::{ProviderError, QaProvider};

/// Marker the provider embeds in 429 bodies when the account's quota
/// ceiling is configured to zero. Best-effort string match; a wording
/// change upstream silently downgrades this to a generic API error.
const ZERO_QUOTA_MARKER: &str = "limit: 0";

/// Gemini API client
///
/// Submits the audit instructions, the note text, and the report schema to
/// the `generateContent` REST endpoint and parses the schema-constrained
/// JSON the model emits.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model_id: String,
    prompt: AuditPrompt,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(
        base_url: String,
        api_key: String,
        model_id: String,
        prompt: AuditPrompt,
        timeout_secs: u64,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model_id,
            prompt,
            client,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model_id,
            self.api_key
        )
    }

    fn request_body(&self, note: &NoteInput) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": self.prompt.instructions }]
            },
            "contents": [{
                "parts": [{ "text": self.prompt.user_message(note) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": self.prompt.response_schema,
            }
        })
    }

    fn classify_failure(status: StatusCode, body: String) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::Unauthorized(format!("{}: {}", status, body))
            }
            StatusCode::TOO_MANY_REQUESTS if body.contains(ZERO_QUOTA_MARKER) => {
                tracing::error!("Provider account has a hard request limit of 0");
                tracing::error!(
                    "Fix: open https://aistudio.google.com/app/settings and enable pay-as-you-go billing"
                );
                ProviderError::QuotaExhausted(format!("{}: {}", status, body))
            }
            _ => ProviderError::Api(format!("{}: {}", status, body)),
        }
    }
}

/// Extract the QA report from a `generateContent` response body.
///
/// The model's output arrives as a JSON string inside
/// `candidates[0].content.parts[0].text`; anything missing along that path,
/// or text that does not parse into the report shape, is a contract breach.
fn extract_report(body: &Value) -> Result<QaReport, ProviderError> {
    let text = body
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.pointer("/content/parts/0/text"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| {
            ProviderError::InvalidResponse("Missing candidate text in provider response".into())
        })?;

    serde_json::from_str(text)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse QA report: {}", e)))
}

#[async_trait]
impl QaProvider for GeminiClient {
    async fn analyze(&self, note: &NoteInput) -> Result<QaReport, ProviderError> {
        let url = self.generate_url();

        tracing::debug!("Submitting note to model {}", self.model_id);

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(note))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, body));
        }

        let body: Value = response.json().await?;
        extract_report(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LetterGrade;

    fn provider_body(report_json: &str) -> Value {
        json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": report_json }]
                }
            }]
        })
    }

    #[test]
    fn test_extract_report_happy_path() {
        let body = provider_body(r#"{"overall_score":92,"letter_grade":"A+","flags":[]}"#);
        let report = extract_report(&body).unwrap();

        assert_eq!(report.overall_score, 92);
        assert_eq!(report.letter_grade, LetterGrade::APlus);
        assert!(report.flags.is_empty());
    }

    #[test]
    fn test_extract_report_missing_candidates() {
        let body = json!({ "candidates": [] });
        let err = extract_report(&body).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn test_extract_report_nonconforming_grade() {
        let body = provider_body(r#"{"overall_score":40,"letter_grade":"F","flags":[]}"#);
        let err = extract_report(&body).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn test_classify_zero_quota_failure() {
        let err = GeminiClient::classify_failure(
            StatusCode::TOO_MANY_REQUESTS,
            "RESOURCE_EXHAUSTED: quota metric exceeded, limit: 0".to_string(),
        );
        assert!(matches!(err, ProviderError::QuotaExhausted(_)));
    }

    #[test]
    fn test_classify_plain_rate_limit_is_generic() {
        let err = GeminiClient::classify_failure(
            StatusCode::TOO_MANY_REQUESTS,
            "RESOURCE_EXHAUSTED: quota metric exceeded, limit: 1500".to_string(),
        );
        assert!(matches!(err, ProviderError::Api(_)));
    }

    #[test]
    fn test_classify_auth_failure() {
        let err = GeminiClient::classify_failure(
            StatusCode::FORBIDDEN,
            "API key not valid".to_string(),
        );
        assert!(matches!(err, ProviderError::Unauthorized(_)));
    }

    #[test]
    fn test_generate_url_shape() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/".to_string(),
            "test-key".to_string(),
            "gemini-flash-latest".to_string(),
            AuditPrompt::clinical_default(),
            30,
        );
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-flash-latest:generateContent?key=test-key"
        );
    }
}
