//! Configuration module

use std::env;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the leaf quality classifier (ONNX)
    pub vision_model_path: String,

    /// Path to the cocoon yield regressor (ONNX)
    pub yield_model_path: String,

    /// Prediction cache capacity (entries)
    pub cache_capacity: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(constants::DEFAULT_PORT),

            vision_model_path: env::var("VISION_MODEL_PATH")
                .unwrap_or_else(|_| constants::DEFAULT_VISION_MODEL_PATH.to_string()),

            yield_model_path: env::var("YIELD_MODEL_PATH")
                .unwrap_or_else(|_| constants::DEFAULT_YIELD_MODEL_PATH.to_string()),

            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(constants::DEFAULT_CACHE_CAPACITY),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
            vision_model_path: constants::DEFAULT_VISION_MODEL_PATH.to_string(),
            yield_model_path: constants::DEFAULT_YIELD_MODEL_PATH.to_string(),
            cache_capacity: constants::DEFAULT_CACHE_CAPACITY,
            environment: "development".to_string(),
        }
    }
}
