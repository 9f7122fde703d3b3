//! Frame encoding module
//!
//! Compresses normalized RGBA frames for upload (JPEG) or inspection (TIFF).

mod writer;
mod jpeg_encoder;
mod tiff_encoder;
pub mod types;


pub use writer::FrameEncoder;
pub use jpeg_encoder::JpegFrameEncoder;
pub use tiff_encoder::TiffFrameEncoder;
pub use types::{CaptureConfig, CaptureConfigBuilder, TiffCompression, DEFAULT_JPEG_QUALITY};
