//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::constants;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    models_ready: bool,
    api_v: &'static str,
}

/// Serves both `/` and `/health`. `models_ready` is true only when the
/// vision and yield capabilities are both loaded.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().timestamp(),
        models_ready: state.service.models_ready(),
        api_v: constants::APP_VERSION,
    })
}
