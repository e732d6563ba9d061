//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.

/// App name
pub const APP_NAME: &str = "MulberryLeaf AI";

/// App version (reported as `api_v` by the health endpoint)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default server port
pub const DEFAULT_PORT: u16 = 8000;

/// Default path to the leaf quality classifier artifact
pub const DEFAULT_VISION_MODEL_PATH: &str = "models/leaf_quality.onnx";

/// Default path to the cocoon yield regressor artifact
pub const DEFAULT_YIELD_MODEL_PATH: &str = "models/cocoon_yield.onnx";

/// Default prediction cache capacity (entries)
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Maximum accepted upload size (bytes)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
