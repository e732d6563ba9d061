//! Prediction records and API payloads

use serde::{Deserialize, Serialize};

/// Which predictor produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    LeafQuality,
    CocoonYield,
}

/// Canonical result payload for either predictor.
///
/// Constructed once, never mutated. Leaf-quality records are what the
/// prediction cache stores; absent fields stay out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub prediction_type: PredictionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_yield: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
}

impl PredictionRecord {
    /// Record for a leaf quality classification
    pub fn leaf_quality(class_name: String, confidence: f32, image_hash: String) -> Self {
        Self {
            prediction_type: PredictionType::LeafQuality,
            class_name: Some(class_name),
            confidence: Some(confidence),
            estimated_yield: None,
            image_hash: Some(image_hash),
        }
    }

    /// Record for a cocoon yield estimate
    pub fn cocoon_yield(estimated_yield: f32) -> Self {
        Self {
            prediction_type: PredictionType::CocoonYield,
            class_name: None,
            confidence: None,
            estimated_yield: Some(estimated_yield),
            image_hash: None,
        }
    }
}

/// Request body for POST /predict/yield
#[derive(Debug, Deserialize)]
pub struct YieldPredictionRequest {
    pub avg_quality: f32,
    pub temperature: f32,
    pub humidity: f32,
}

/// Response for POST /predict/leaf-quality
#[derive(Debug, Serialize)]
pub struct LeafQualityResponse {
    #[serde(flatten)]
    pub record: PredictionRecord,
    pub prediction_time: f64,
    pub cached: bool,
}

/// Response for POST /predict/yield
#[derive(Debug, Serialize)]
pub struct YieldResponse {
    #[serde(flatten)]
    pub record: PredictionRecord,
    pub prediction_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_type_serializes_snake_case() {
        let leaf = serde_json::to_value(PredictionType::LeafQuality).unwrap();
        let yield_ = serde_json::to_value(PredictionType::CocoonYield).unwrap();

        assert_eq!(leaf, "leaf_quality");
        assert_eq!(yield_, "cocoon_yield");
    }

    #[test]
    fn test_leaf_record_omits_yield_field() {
        let record =
            PredictionRecord::leaf_quality("Excellent".to_string(), 0.92, "abc123".to_string());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["prediction_type"], "leaf_quality");
        assert_eq!(json["class_name"], "Excellent");
        assert_eq!(json["image_hash"], "abc123");
        assert!(json.get("estimated_yield").is_none());
    }

    #[test]
    fn test_yield_record_omits_classifier_fields() {
        let record = PredictionRecord::cocoon_yield(8.25);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["prediction_type"], "cocoon_yield");
        assert!(json.get("class_name").is_none());
        assert!(json.get("confidence").is_none());
        assert!(json.get("image_hash").is_none());
    }
}
