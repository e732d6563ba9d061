//! Prediction handlers

use std::time::Instant;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::logic::hashing;
use crate::models::{LeafQualityResponse, PredictionRecord, YieldPredictionRequest, YieldResponse};
use crate::AppState;

/// POST /predict/leaf-quality
///
/// Multipart upload with a `file` field. Repeated images are answered from
/// the cache, keyed by the SHA-256 of the raw upload bytes.
pub async fn predict_leaf_quality(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<LeafQualityResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let is_image = field
            .content_type()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false);
        if !is_image {
            return Err(AppError::BadRequest("File must be an image.".to_string()));
        }

        let start = Instant::now();
        let image_bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        let image_hash = hashing::content_hash(&image_bytes);

        if let Some(record) = state.cache.get(&image_hash) {
            tracing::debug!("Cache hit for image {}", image_hash);
            return Ok(Json(LeafQualityResponse {
                record,
                prediction_time: round4_seconds(start.elapsed().as_secs_f64()),
                cached: true,
            }));
        }

        // Classification is CPU-bound; keep it off the async workers.
        let service = state.service.clone();
        let prediction = tokio::task::spawn_blocking(move || service.classify_leaf(&image_bytes))
            .await
            .map_err(|e| AppError::InternalError(format!("Inference task failed: {}", e)))??;

        let record = PredictionRecord::leaf_quality(
            prediction.class_name,
            round4(prediction.confidence),
            image_hash.clone(),
        );
        state.cache.set(image_hash, record.clone());

        return Ok(Json(LeafQualityResponse {
            record,
            prediction_time: round4_seconds(start.elapsed().as_secs_f64()),
            cached: false,
        }));
    }

    Err(AppError::BadRequest("No file field in request".to_string()))
}

/// POST /predict/yield
///
/// Numeric parameters, no caching: the inputs are not content-addressed.
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(request): Json<YieldPredictionRequest>,
) -> AppResult<Json<YieldResponse>> {
    let start = Instant::now();

    let service = state.service.clone();
    let estimated = tokio::task::spawn_blocking(move || {
        service.estimate_yield(request.avg_quality, request.temperature, request.humidity)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Inference task failed: {}", e)))??;

    Ok(Json(YieldResponse {
        record: PredictionRecord::cocoon_yield(round4(estimated)),
        prediction_time: round4_seconds(start.elapsed().as_secs_f64()),
    }))
}

/// Round to 4 decimal places, the precision stored and served for scores.
fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

fn round4_seconds(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
