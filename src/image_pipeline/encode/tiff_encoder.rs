use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, CaptureError};
use crate::image_pipeline::encode::types::{CaptureConfig, TiffCompression};
use crate::image_pipeline::encode::writer::{FrameEncoder, checked_dimensions};
use crate::image_pipeline::frame::NormalizedFrame;

/// Lossless RGBA8 TIFF output, useful for checking orientation by eye.
pub struct TiffFrameEncoder;

impl FrameEncoder for TiffFrameEncoder {
    fn encode(&self, frame: &NormalizedFrame, output: &mut dyn Write, config: &CaptureConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", frame.width, frame.height);

        let (width, height) = checked_dimensions(frame)?;
        let mut buffer = Vec::new();

        {
            let compression = match config.tiff_compression {
                TiffCompression::None => tiff::encoder::Compression::Uncompressed,
                TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
                TiffCompression::Deflate => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            };

            let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
                .map_err(|e| CaptureError::EncodeError(e.to_string()))?
                .with_compression(compression);

            if let Some(predictor_val) = config.predictor {
                let predictor = match predictor_val {
                    2 => tiff::tags::Predictor::Horizontal,
                    _ => tiff::tags::Predictor::None,
                };
                encoder = encoder.with_predictor(predictor);
            }

            encoder.write_image::<tiff::encoder::colortype::RGBA8>(
                width,
                height,
                &frame.data,
            ).map_err(|e| CaptureError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "image/tiff"
    }
}
