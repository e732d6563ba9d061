//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::model::ModelKind;

pub type AppResult<T> = Result<T, AppError>;

/// Failures raised by the prediction pipeline, below the HTTP layer.
/// Never retried; the boundary decides the externally visible status.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PredictError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("{0} model is not loaded")]
    ModelNotLoaded(ModelKind),

    #[error("Inference failed: {0}")]
    Inference(String),
}

#[derive(Debug)]
pub enum AppError {
    // Request errors
    BadRequest(String),
    InvalidImage(String),

    // Model errors
    ModelNotLoaded(ModelKind),
    InferenceError(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidImage(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid image: {}", msg))
            }
            AppError::ModelNotLoaded(kind) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("{} model is not loaded", kind),
            ),
            AppError::InferenceError(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Inference failed".to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::InvalidImage(msg) => AppError::InvalidImage(msg),
            PredictError::ModelNotLoaded(kind) => AppError::ModelNotLoaded(kind),
            PredictError::Inference(msg) => AppError::InferenceError(msg),
        }
    }
}
