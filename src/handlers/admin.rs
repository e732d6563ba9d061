//! Cache administration handlers

use axum::{extract::State, Json};

use crate::logic::CacheStats;
use crate::AppState;

/// POST /admin/cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> Json<serde_json::Value> {
    let dropped = state.cache.len();
    state.cache.clear();

    tracing::info!("Prediction cache cleared ({} entries dropped)", dropped);

    Json(serde_json::json!({
        "status": "cleared",
        "entries_dropped": dropped
    }))
}

/// GET /admin/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}
