mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::AuditPrompt;
use crate::routes::AppState;
use crate::services::{GeminiClient, QaProvider};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; RUST_LOG overrides the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting clinical QA engine...");

    // Initialize the Gemini provider with the production audit rubric
    let provider: Arc<dyn QaProvider> = Arc::new(GeminiClient::new(
        settings.provider.endpoint.clone(),
        settings.provider.api_key.clone(),
        settings.provider.model_id.clone(),
        AuditPrompt::clinical_default(),
        settings.provider.timeout_secs,
    ));

    info!("Gemini client initialized (model: {})", settings.provider.model_id);

    // Build application state
    let app_state = AppState {
        provider,
        engine: settings.provider.model_id.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
