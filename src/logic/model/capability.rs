//! Model Capabilities - narrow prediction interfaces
//!
//! A capability is an opaque, read-only prediction function backed by a
//! loaded artifact. Keeping both model kinds behind traits makes the
//! loading mechanism swappable and lets tests substitute fixed outputs.

use ndarray::Array4;

use crate::error::PredictError;

/// Label vocabulary for leaf classification, index-aligned with the
/// classifier's output vector. Alphabetical, matching the class folder
/// layout the model was trained on.
pub const CLASS_LABELS: [&str; 3] = ["Excellent", "Moderate", "Poor"];

/// Which of the two model slots an operation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Vision,
    Yield,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Vision => write!(f, "vision"),
            ModelKind::Yield => write!(f, "yield"),
        }
    }
}

/// Image classifier: preprocessed pixel tensor in, class probability
/// vector out. Must be safe to call from multiple threads at once.
pub trait VisionCapability: Send + Sync {
    fn predict(&self, pixels: Array4<f32>) -> Result<Vec<f32>, PredictError>;
}

/// Tabular regressor: fixed 3-feature vector in, scalar estimate out.
pub trait YieldCapability: Send + Sync {
    fn predict(&self, features: [f32; 3]) -> Result<f32, PredictError>;
}
