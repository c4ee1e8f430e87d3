use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::{ErrorResponse, HealthResponse, NoteInput};
use crate::services::{ProviderError, QaProvider};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn QaProvider>,
    /// Model identifier reported by the liveness endpoint
    pub engine: String,
}

/// Configure all note-analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health))
        .route("/analyze-note", web::post().to(analyze_note));
}

/// Liveness endpoint
///
/// GET /
///
/// Always succeeds and never touches the provider.
async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "active".to_string(),
        engine: state.engine.clone(),
    })
}

/// Analyze a clinical note
///
/// POST /analyze-note
///
/// Request body:
/// ```json
/// {
///   "note": "string",
///   "note_type": "string",
///   "date_of_service": "string",
///   "date_of_injury": "string"
/// }
/// ```
///
/// Returns the provider's QA report unmodified on success. Failures map to
/// distinct statuses: 503 when the account quota is exhausted, 502 for any
/// other provider-side failure. Malformed bodies are rejected with 400 by
/// the JSON payload handler before this handler runs.
async fn analyze_note(
    state: web::Data<AppState>,
    req: web::Json<NoteInput>,
) -> impl Responder {
    tracing::info!(
        "Analyzing {} note ({} chars)",
        req.note_type,
        req.note.len()
    );

    match state.provider.analyze(&req).await {
        Ok(report) => {
            tracing::info!(
                "Note graded {:?} with {} flags",
                report.letter_grade,
                report.flags.len()
            );
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            tracing::error!("Provider call failed: {}", e);

            let (status, error) = match &e {
                ProviderError::QuotaExhausted(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "provider_quota_exhausted")
                }
                ProviderError::Unauthorized(_) => {
                    (StatusCode::BAD_GATEWAY, "provider_unauthorized")
                }
                ProviderError::Transport(_) => (StatusCode::BAD_GATEWAY, "provider_unreachable"),
                ProviderError::InvalidResponse(_) => {
                    (StatusCode::BAD_GATEWAY, "provider_contract_breach")
                }
                ProviderError::Api(_) => (StatusCode::BAD_GATEWAY, "provider_error"),
            };

            HttpResponse::build(status).json(ErrorResponse {
                error: error.to_string(),
                detail: e.to_string(),
                status_code: status.as_u16(),
            })
        }
    }
}
