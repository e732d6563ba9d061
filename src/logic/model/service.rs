//! Inference Service - stateless facade over the model capabilities
//!
//! Constructed once at startup and shared behind an `Arc`. A model artifact
//! that fails to load leaves its slot empty; the matching operation then
//! fails with `ModelNotLoaded` instead of taking the process down.

use std::sync::Arc;

use crate::config::Config;
use crate::error::PredictError;

use super::capability::{ModelKind, VisionCapability, YieldCapability, CLASS_LABELS};
use super::onnx::{OnnxVision, OnnxYield};
use super::preprocess;

/// Classifier verdict for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafPrediction {
    pub class_name: String,
    pub confidence: f32,
}

pub struct InferenceService {
    vision: Option<Arc<dyn VisionCapability>>,
    yield_model: Option<Arc<dyn YieldCapability>>,
}

impl InferenceService {
    pub fn new(
        vision: Option<Arc<dyn VisionCapability>>,
        yield_model: Option<Arc<dyn YieldCapability>>,
    ) -> Self {
        Self {
            vision,
            yield_model,
        }
    }

    /// Load both artifacts from the configured paths. A failed load logs a
    /// warning and leaves that slot empty rather than aborting startup.
    pub fn from_config(config: &Config) -> Self {
        let vision = match OnnxVision::load(&config.vision_model_path) {
            Ok(model) => Some(Arc::new(model) as Arc<dyn VisionCapability>),
            Err(e) => {
                tracing::warn!("Vision model unavailable: {}", e);
                None
            }
        };

        let yield_model = match OnnxYield::load(&config.yield_model_path) {
            Ok(model) => Some(Arc::new(model) as Arc<dyn YieldCapability>),
            Err(e) => {
                tracing::warn!("Yield model unavailable: {}", e);
                None
            }
        };

        Self::new(vision, yield_model)
    }

    /// Classify one leaf image from raw upload bytes.
    ///
    /// Returns the arg-max label and its probability. The capability check
    /// comes before decoding: without a vision model the outcome is
    /// `ModelNotLoaded` no matter what bytes arrive.
    pub fn classify_leaf(&self, image_bytes: &[u8]) -> Result<LeafPrediction, PredictError> {
        let vision = self
            .vision
            .as_ref()
            .ok_or(PredictError::ModelNotLoaded(ModelKind::Vision))?;

        let pixels = preprocess::image_to_tensor(image_bytes)?;
        let probabilities = vision.predict(pixels)?;

        if probabilities.len() != CLASS_LABELS.len() {
            return Err(PredictError::Inference(format!(
                "Expected {} class scores, got {}",
                CLASS_LABELS.len(),
                probabilities.len()
            )));
        }

        let (best_idx, best_score) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .ok_or_else(|| PredictError::Inference("Empty probability vector".to_string()))?;

        Ok(LeafPrediction {
            class_name: CLASS_LABELS[best_idx].to_string(),
            confidence: best_score,
        })
    }

    /// Estimate cocoon yield from the fixed feature order
    /// [avg_quality, temperature, humidity]. The scalar comes back from the
    /// regressor unmodified.
    pub fn estimate_yield(
        &self,
        avg_quality: f32,
        temperature: f32,
        humidity: f32,
    ) -> Result<f32, PredictError> {
        let model = self
            .yield_model
            .as_ref()
            .ok_or(PredictError::ModelNotLoaded(ModelKind::Yield))?;

        model.predict([avg_quality, temperature, humidity])
    }

    pub fn vision_ready(&self) -> bool {
        self.vision.is_some()
    }

    pub fn yield_ready(&self) -> bool {
        self.yield_model.is_some()
    }

    /// Both capabilities present.
    pub fn models_ready(&self) -> bool {
        self.vision_ready() && self.yield_ready()
    }
}
