use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("A labeling request is already in flight")]
    Busy,

    #[error("Vision API key is not configured (set VISION_API_KEY)")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Request failed. HTTP Response code: {0}")]
    Status(u16),

    #[error("Failed to decode labeling response: {0}")]
    Decode(String),

    #[error("Labeling service reported an error: {0}")]
    Api(String),

    #[error("Labeling response contained no results")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, LabelError>;
