//! Vibration Analysis API Server
//!
//! HTTP front end for the analysis pipeline: spreadsheet upload, standard
//! registry listing, and health reporting.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod ingest;
mod routes;

pub use config::ServerConfig;
pub use ingest::{raw_table_from_csv, IngestError};

use analysis_pipeline::AnalysisError;

/// Application state shared across handlers.
///
/// Read-only after startup; uploads never share mutable state.
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// User-facing API error: a status code and a message
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to respond with
    pub status: StatusCode,
    /// Human-readable message
    pub message: String,
}

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// 400 error for malformed upload requests
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<AnalysisError> for ApiError {
    /// Pipeline errors are bad input, not server faults
    fn from(err: AnalysisError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_upload = state.config.max_upload_bytes;
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/analyze", post(routes::analyze::upload))
        .route("/api/v1/standards", get(routes::standards::list))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub standards_registered: usize,
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        standards_registered: standards_engine::Standard::all().len(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    // a second init (e.g. under the test harness) keeps the first subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Run the server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    info!("Starting vibration analysis API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
