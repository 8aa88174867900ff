//! Census Income API Server
//!
//! HTTP input-collection surface for the income prediction pipeline:
//! collect a profile, validate it, align it with the model vocabulary, run
//! the classifier, return the label.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::ApiError;

use anyhow::Context;
use data_validator::Validator;
use feature_engine::FeatureAligner;
use inference_engine::IncomeModel;

/// Application state shared across handlers.
///
/// Written once at startup, read-only afterwards: shared as a plain `Arc`
/// with no lock.
pub struct AppState {
    /// Loaded classifier
    pub model: IncomeModel,
    /// Aligner projecting profiles onto the model vocabulary
    pub aligner: FeatureAligner,
    /// Profile validator
    pub validator: Validator,
    /// Path the model was loaded from
    pub model_path: String,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build application state around a loaded model
    pub fn new(model: IncomeModel, model_path: impl Into<String>) -> Self {
        let aligner = FeatureAligner::new(model.vocabulary().clone());
        Self {
            model,
            aligner,
            validator: Validator::default(),
            model_path: model_path.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: ModelSummary,
}

/// Summary of the loaded model
#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub path: String,
    pub feature_count: usize,
    pub threshold: f64,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/schema", get(routes::schema::get_schema))
        .route("/api/v1/predict", post(routes::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model: ModelSummary {
            path: state.model_path.clone(),
            feature_count: state.model.feature_count(),
            threshold: state.model.threshold(),
        },
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load the model and run the server until shutdown
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let model = IncomeModel::from_path(&config.model_path).with_context(|| {
        format!(
            "cannot serve predictions without model artifact at {}",
            config.model_path
        )
    })?;
    let state = Arc::new(AppState::new(model, config.model_path.clone()));

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install metrics recorder")?;
    let app = create_router(state).route(
        "/metrics",
        get(move || {
            let handle = metrics_handle.clone();
            async move { handle.render() }
        }),
    );

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
