use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, info, instrument, warn};

use crate::vision::error::{LabelError, Result};
use crate::vision::types::{AnnotateRequestBody, AnnotateResponseBody, LabelAnnotation};

pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Something that can label an encoded image.
pub trait LabelService {
    fn annotate(&self, image: &[u8]) -> Result<Vec<LabelAnnotation>>;
}

/// Configuration for the Vision API client
#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
    /// Upper bound on labels returned per image
    pub max_results: u32,
    pub timeout: Duration,
}

impl VisionConfig {
    pub fn builder(api_key: impl Into<String>) -> VisionConfigBuilder {
        VisionConfigBuilder {
            api_key: api_key.into(),
            endpoint: None,
            max_results: None,
            timeout: None,
        }
    }

    /// Reads `VISION_API_KEY` and, optionally, `VISION_API_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("VISION_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(LabelError::MissingApiKey)?;
        let mut builder = Self::builder(api_key);
        if let Some(endpoint) = lookup("VISION_API_ENDPOINT") {
            builder = builder.endpoint(endpoint);
        }
        Ok(builder.build())
    }
}

pub struct VisionConfigBuilder {
    api_key: String,
    endpoint: Option<String>,
    max_results: Option<u32>,
    timeout: Option<Duration>,
}

impl VisionConfigBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> VisionConfig {
        VisionConfig {
            endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key: self.api_key,
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
        }
    }
}

/// Blocking client for label detection. At most one request is in flight.
pub struct VisionApiClient {
    config: VisionConfig,
    client: Client,
    uploading: AtomicBool,
}

impl VisionApiClient {
    pub fn new(config: VisionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LabelError::Http(e.to_string()))?;
        Ok(Self {
            config,
            client,
            uploading: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::Acquire)
    }
}

impl LabelService for VisionApiClient {
    #[instrument(skip(self, image), fields(image_size = image.len()))]
    fn annotate(&self, image: &[u8]) -> Result<Vec<LabelAnnotation>> {
        let _in_flight = InFlight::try_acquire(&self.uploading).ok_or(LabelError::Busy)?;

        let body = AnnotateRequestBody::label_detection(image, self.config.max_results);
        debug!("Posting label request to {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| {
                warn!("Label request failed: {}", e);
                LabelError::Http(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Label request rejected");
            return Err(LabelError::Status(status.as_u16()));
        }

        let labels = response
            .json::<AnnotateResponseBody>()
            .map_err(|e| LabelError::Decode(e.to_string()))?
            .into_labels()?;

        info!(count = labels.len(), "Labels received");
        Ok(labels)
    }
}

/// Holds the upload flag for the lifetime of one request.
pub(crate) struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    pub(crate) fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
