use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use rishta_match::config::{LoggingSettings, Settings};
use rishta_match::models::ErrorResponse;
use rishta_match::routes::{self, tools::AppState};
use rishta_match::services::{CandidatePool, PoolError, ToolRegistry};
use rishta_match::Matcher;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Failures that stop the service from starting
#[derive(Debug, Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Candidate pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<StartupError> for std::io::Error {
    fn from(err: StartupError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

/// Render JSON payload errors as `ErrorResponse`
fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(
        err,
        HttpResponse::build(StatusCode::BAD_REQUEST).json(body),
    )
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn load_pool(settings: &Settings) -> Result<CandidatePool, PoolError> {
    match &settings.pool.path {
        Some(path) => {
            info!("Loading candidate pool from {}", path);
            CandidatePool::load(path)
        }
        None => {
            info!("Using built-in candidate pool");
            CandidatePool::embedded()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(StartupError::from(e).into());
        }
    };

    init_logging(&settings.logging);
    info!("Starting Rishta Match tool service...");

    let pool = match load_pool(&settings) {
        Ok(pool) => Arc::new(pool),
        Err(e) => {
            error!("Failed to load candidate pool: {}", e);
            return Err(StartupError::from(e).into());
        }
    };

    info!("Candidate pool loaded ({} candidates)", pool.len());

    let matcher = Matcher::new(pool.clone());
    let app_state = AppState {
        pool,
        tools: ToolRegistry::with_matcher(matcher),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
