//! Request and response bodies of the `images:annotate` endpoint

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::vision::error::{LabelError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct AnnotateRequestBody {
    pub requests: Vec<AnnotateImageRequest>,
}

impl AnnotateRequestBody {
    /// A single label-detection request for one encoded image.
    pub fn label_detection(image: &[u8], max_results: u32) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: STANDARD.encode(image),
                },
                features: vec![Feature {
                    feature_type: FeatureType::LabelDetection,
                    max_results,
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

/// Inline image bytes, base64 encoded.
#[derive(Debug, Clone, Serialize)]
pub struct ImageContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub max_results: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    TypeUnspecified,
    FaceDetection,
    LandmarkDetection,
    LogoDetection,
    LabelDetection,
    TextDetection,
    SafeSearchDetection,
    ImageProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotateResponseBody {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

impl AnnotateResponseBody {
    /// Labels of the first (and only) image in the batch.
    pub fn into_labels(self) -> Result<Vec<LabelAnnotation>> {
        let first = self
            .responses
            .into_iter()
            .next()
            .ok_or(LabelError::EmptyResponse)?;
        if let Some(status) = first.error {
            return Err(LabelError::Api(format!("{} (code {})", status.message, status.code)));
        }
        Ok(first.label_annotations)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub label_annotations: Vec<LabelAnnotation>,
    #[serde(default)]
    pub error: Option<ApiStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelAnnotation {
    #[serde(default)]
    pub mid: String,
    #[serde(default)]
    pub locale: Option<String>,
    pub description: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub topicality: Option<f32>,
}
