//! Model Module - ONNX Inference
//!
//! Capability traits, the canonical image preprocessing, and the service
//! facade that owns both loaded models.

pub mod capability;
pub mod onnx;
pub mod preprocess;
pub mod service;

// Re-export common types
pub use capability::{ModelKind, VisionCapability, YieldCapability, CLASS_LABELS};
pub use onnx::{OnnxVision, OnnxYield};
pub use service::{InferenceService, LeafPrediction};
