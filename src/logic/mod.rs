//! Logic Module - Hashing, Caching & Model Inference
//!
//! The prediction pipeline lives here: content hashing for cache keys,
//! the bounded FIFO prediction cache, and the ONNX inference service.

pub mod cache;
pub mod hashing;
pub mod model;

// Re-export common types
pub use cache::{CacheStats, PredictionCache};
pub use model::{InferenceService, ModelKind};
