use std::io::Write;
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, CaptureError};
use crate::image_pipeline::encode::types::CaptureConfig;
use crate::image_pipeline::encode::writer::{FrameEncoder, checked_dimensions};
use crate::image_pipeline::frame::NormalizedFrame;

/// Encodes normalized frames as baseline JPEG. Alpha is discarded.
pub struct JpegFrameEncoder;

impl FrameEncoder for JpegFrameEncoder {
    fn encode(&self, frame: &NormalizedFrame, output: &mut dyn Write, config: &CaptureConfig) -> Result<()> {
        debug!("Encoding JPEG image: {}x{} (quality {})", frame.width, frame.height, config.jpeg_quality);

        let (width, height) = checked_dimensions(frame)?;

        let rgb: Vec<u8> = frame.data
            .chunks_exact(frame.channels())
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality.clamp(1, 100))
            .encode(&rgb, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| CaptureError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("JPEG encoding complete, {} bytes", buffer.len());
        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "image/jpeg"
    }
}
