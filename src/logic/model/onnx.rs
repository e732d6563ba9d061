//! ONNX Runtime backed model capabilities.
//!
//! `Session::run` needs exclusive access, so each capability guards its
//! own session with a mutex. The two models lock independently and never
//! block each other.

use std::path::Path;

use ndarray::{Array2, Array4};
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;
use parking_lot::Mutex;

use super::capability::{VisionCapability, YieldCapability};
use crate::error::PredictError;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Failure while building a session from a model artifact.
#[derive(Debug)]
pub struct ModelLoadError(pub String);

impl std::fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelLoadError: {}", self.0)
    }
}

impl std::error::Error for ModelLoadError {}

// ============================================================================
// SESSION LOADING
// ============================================================================

fn build_session(model_path: &str) -> Result<(Session, String), ModelLoadError> {
    if !Path::new(model_path).exists() {
        return Err(ModelLoadError(format!("Model not found: {}", model_path)));
    }

    let session = Session::builder()
        .map_err(|e| ModelLoadError(format!("Failed to create session builder: {}", e)))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| ModelLoadError(format!("Failed to set optimization: {}", e)))?
        .commit_from_file(model_path)
        .map_err(|e| ModelLoadError(format!("Failed to load model: {}", e)))?;

    // Resolve the output name up front; `run` borrows the session mutably.
    let output_name = session
        .outputs
        .first()
        .map(|o| o.name.clone())
        .ok_or_else(|| ModelLoadError("No output defined".to_string()))?;

    Ok((session, output_name))
}

// ============================================================================
// VISION MODEL
// ============================================================================

/// Leaf quality classifier session.
#[derive(Debug)]
pub struct OnnxVision {
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxVision {
    pub fn load(model_path: &str) -> Result<Self, ModelLoadError> {
        tracing::info!("Loading vision model from: {}", model_path);
        let (session, output_name) = build_session(model_path)?;
        tracing::info!("Vision model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl VisionCapability for OnnxVision {
    fn predict(&self, pixels: Array4<f32>) -> Result<Vec<f32>, PredictError> {
        let input_tensor = Value::from_array(pixels)
            .map_err(|e| PredictError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| PredictError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| PredictError::Inference("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError::Inference(format!("Extract error: {}", e)))?;

        Ok(output_tensor.1.to_vec())
    }
}

// ============================================================================
// YIELD MODEL
// ============================================================================

/// Cocoon yield regressor session.
pub struct OnnxYield {
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxYield {
    pub fn load(model_path: &str) -> Result<Self, ModelLoadError> {
        tracing::info!("Loading yield model from: {}", model_path);
        let (session, output_name) = build_session(model_path)?;
        tracing::info!("Yield model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl YieldCapability for OnnxYield {
    fn predict(&self, features: [f32; 3]) -> Result<f32, PredictError> {
        let input_array = Array2::<f32>::from_shape_vec((1, 3), features.to_vec())
            .map_err(|e| PredictError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| PredictError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| PredictError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| PredictError::Inference("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError::Inference(format!("Extract error: {}", e)))?;

        output_tensor
            .1
            .first()
            .copied()
            .ok_or_else(|| PredictError::Inference("Empty output".to_string()))
    }
}
