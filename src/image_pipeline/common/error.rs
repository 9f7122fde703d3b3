use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Invalid frame dimensions: width={width}, height={height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Frame buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported pixel format tag: {0}")]
    UnsupportedFormat(u32),

    #[error("No camera frame available yet")]
    NoFrameAvailable,

    #[error("Failed to encode frame: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CaptureError {
    /// `NoFrameAvailable` is the "still searching" state rather than a failure.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, CaptureError::NoFrameAvailable)
    }
}

pub type Result<T> = std::result::Result<T, CaptureError>;
