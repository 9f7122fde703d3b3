use std::io::Write;
use crate::image_pipeline::common::error::{CaptureError, Result};
use crate::image_pipeline::encode::types::CaptureConfig;
use crate::image_pipeline::frame::{NORMALIZED_CHANNELS, NormalizedFrame};

pub trait FrameEncoder {
    fn encode(&self, frame: &NormalizedFrame, output: &mut dyn Write, config: &CaptureConfig) -> Result<()>;

    /// MIME type of the encoded bytes.
    fn content_type(&self) -> &'static str;
}

/// Frame dimensions as the codecs want them, after checking the buffer
/// really holds `width * height` RGBA pixels.
pub(crate) fn checked_dimensions(frame: &NormalizedFrame) -> Result<(u32, u32)> {
    let invalid = || CaptureError::InvalidDimensions { width: frame.width, height: frame.height };
    let width = u32::try_from(frame.width).map_err(|_| invalid())?;
    let height = u32::try_from(frame.height).map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let expected = frame.width
        .checked_mul(frame.height)
        .and_then(|pixels| pixels.checked_mul(NORMALIZED_CHANNELS))
        .ok_or_else(invalid)?;
    if frame.data.len() != expected {
        return Err(CaptureError::BufferSizeMismatch { expected, actual: frame.data.len() });
    }
    Ok((width, height))
}
