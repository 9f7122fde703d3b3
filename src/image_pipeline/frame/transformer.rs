//! Rotation and channel expansion of camera frames.
//!
//! The platform texture reader hands back frames rotated 270 degrees and
//! mirrored relative to the display. [`FrameBufferTransformer`] undoes both in
//! a single pass and widens every pixel to RGBA so encoders only ever see one
//! layout.

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{CaptureError, Result};
use crate::image_pipeline::frame::types::{
    NORMALIZED_CHANNELS, NormalizedFrame, PixelFormat, RawFrame, RawFrameView,
};

/// Converts raw sensor-oriented frames into upright RGBA frames.
#[derive(Debug, Clone, Default)]
pub struct FrameBufferTransformer {
    max_dimension: Option<usize>,
}

impl FrameBufferTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects frames whose width or height exceeds `max`.
    pub fn with_max_dimension(max: Option<usize>) -> Self {
        Self { max_dimension: max }
    }

    pub fn max_dimension(&self) -> Option<usize> {
        self.max_dimension
    }

    pub fn normalize(&self, raw: &RawFrame) -> Result<NormalizedFrame> {
        self.normalize_view(&raw.as_view())
    }

    /// Rotates the frame by 90 degrees with the sensor mounting flip and
    /// expands it to four channels.
    ///
    /// For a source pixel at row `i`, column `j`:
    ///
    /// ```text
    /// p  = (i * width + j) * src_channels
    /// np = ((width - j - 1) * height + (height - i - 1)) * 4
    /// ```
    ///
    /// The output is `height` pixels wide and `width` pixels tall. Grayscale
    /// bytes are copied into R, G and B with A fixed at 255; RGBA pixels are
    /// copied verbatim. The source is scanned row-major.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` - zero width/height, or larger than the configured maximum
    /// * `BufferSizeMismatch` - the byte count disagrees with the dimensions
    pub fn normalize_view(&self, raw: &RawFrameView<'_>) -> Result<NormalizedFrame> {
        raw.validate()?;
        self.check_max_dimension(raw.width, raw.height)?;

        let width = raw.width;
        let height = raw.height;
        let src_channels = raw.format.channels();
        debug!(
            "Normalizing {:?} frame {}x{} ({} bytes)",
            raw.format,
            width,
            height,
            raw.byte_count()
        );

        // Same pixel count as the source, so this cannot overflow after validate()
        let mut data = vec![0u8; width * height * NORMALIZED_CHANNELS];

        for i in 0..height {
            for j in 0..width {
                let p = (i * width + j) * src_channels;
                let np = ((width - j - 1) * height + (height - i - 1)) * NORMALIZED_CHANNELS;
                let dst = &mut data[np..np + NORMALIZED_CHANNELS];

                match raw.format {
                    PixelFormat::Grayscale => {
                        let luma = raw.data[p];
                        dst.copy_from_slice(&[luma, luma, luma, u8::MAX]);
                    }
                    PixelFormat::Rgba => {
                        dst.copy_from_slice(&raw.data[p..p + NORMALIZED_CHANNELS]);
                    }
                }
            }
        }

        Ok(NormalizedFrame {
            width: height,
            height: width,
            data,
        })
    }

    fn check_max_dimension(&self, width: usize, height: usize) -> Result<()> {
        if let Some(max) = self.max_dimension {
            if width > max || height > max {
                warn!("Frame dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(CaptureError::InvalidDimensions { width, height });
            }
        }
        Ok(())
    }
}
