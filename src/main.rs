//! MulberryLeaf AI Backend Server
//!
//! Prediction API for sericulture: leaf quality classification from images
//! and cocoon yield estimation from rearing parameters.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     MULBERRYLEAF AI                        │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌───────────────────┐ │
//! │  │  API      │   │  Prediction  │   │  Inference        │ │
//! │  │  Gateway  │──▶│  Cache       │──▶│  Service          │ │
//! │  │  (Axum)   │   │  (FIFO)      │   │  (ONNX Runtime)   │ │
//! │  └───────────┘   └──────────────┘   └───────────────────┘ │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod constants;
mod error;
mod handlers;
mod logic;
mod middleware;
mod models;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::{InferenceService, PredictionCache};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "mulberry_api=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);
    tracing::info!("Environment: {}", config.environment);

    // Load model artifacts; a missing artifact degrades that operation only
    let service = Arc::new(InferenceService::from_config(&config));
    if !service.models_ready() {
        if config.is_production() {
            tracing::error!("Production start with missing model artifacts");
        } else {
            tracing::warn!("Starting degraded: not all model artifacts are loaded");
        }
    }

    let cache = Arc::new(PredictionCache::new(config.cache_capacity));

    // Build application state
    let state = AppState {
        service,
        cache,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InferenceService>,
    pub cache: Arc<PredictionCache>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Status routes
    let status_routes = Router::new()
        .route("/", get(handlers::health::check))
        .route("/health", get(handlers::health::check));

    // Prediction routes
    let prediction_routes = Router::new()
        .route("/predict/leaf-quality", post(handlers::prediction::predict_leaf_quality))
        .route("/predict/yield", post(handlers::prediction::predict_yield))
        .layer(DefaultBodyLimit::max(constants::MAX_UPLOAD_BYTES));

    // Cache administration
    let admin_routes = Router::new()
        .route("/admin/cache/stats", get(handlers::admin::cache_stats))
        .route("/admin/cache/clear", post(handlers::admin::clear_cache));

    // Combine all routes
    Router::new()
        .merge(status_routes)
        .merge(prediction_routes)
        .merge(admin_routes)
        .layer(axum_middleware::from_fn(middleware::process_time::track))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
