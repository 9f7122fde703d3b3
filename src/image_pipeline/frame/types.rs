//! Camera frame types

use crate::image_pipeline::common::error::{CaptureError, Result};

/// Channel count of every normalized frame (RGBA).
pub const NORMALIZED_CHANNELS: usize = 4;

/// Platform tag for colour (RGBA) texture reads.
pub const FORMAT_TAG_RGBA: u32 = 0;
/// Platform tag for grayscale texture reads.
pub const FORMAT_TAG_GRAYSCALE: u32 = 1;

/// Pixel layout of a frame delivered by the platform image stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One luminance byte per pixel
    Grayscale,
    /// Four bytes per pixel in R, G, B, A order
    Rgba,
}

impl PixelFormat {
    /// Decodes the integer format tag handed over by the platform callback.
    pub fn from_tag(tag: u32) -> Result<Self> {
        match tag {
            FORMAT_TAG_RGBA => Ok(PixelFormat::Rgba),
            FORMAT_TAG_GRAYSCALE => Ok(PixelFormat::Grayscale),
            other => Err(CaptureError::UnsupportedFormat(other)),
        }
    }

    pub fn tag(self) -> u32 {
        match self {
            PixelFormat::Rgba => FORMAT_TAG_RGBA,
            PixelFormat::Grayscale => FORMAT_TAG_GRAYSCALE,
        }
    }

    /// Bytes occupied by one source pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Grayscale => 1,
            PixelFormat::Rgba => 4,
        }
    }

    /// Byte length a `width` x `height` buffer of this format must have.
    ///
    /// Fails with `InvalidDimensions` when either side is zero or the product
    /// does not fit in `usize`.
    pub fn buffer_len(self, width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions { width, height });
        }
        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(self.channels()))
            .ok_or(CaptureError::InvalidDimensions { width, height })
    }
}

/// A frame borrowed from the platform for the duration of one callback.
#[derive(Debug, Clone, Copy)]
pub struct RawFrameView<'a> {
    pub format: PixelFormat,
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl<'a> RawFrameView<'a> {
    pub fn new(format: PixelFormat, width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            format,
            width,
            height,
            data,
        }
    }

    pub fn byte_count(&self) -> usize {
        self.data.len()
    }

    /// Checks the `byte_count == width * height * channels` contract.
    pub fn validate(&self) -> Result<()> {
        let expected = self.format.buffer_len(self.width, self.height)?;
        if self.data.len() != expected {
            return Err(CaptureError::BufferSizeMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Copies the borrowed bytes out so the platform can reuse its buffer.
    pub fn to_owned_frame(&self) -> RawFrame {
        RawFrame {
            format: self.format,
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }
}

/// An owned copy of one camera-stream payload, at sensor orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub format: PixelFormat,
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RawFrame {
    pub fn new(format: PixelFormat, width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            format,
            width,
            height,
            data,
        }
    }

    pub fn byte_count(&self) -> usize {
        self.data.len()
    }

    pub fn as_view(&self) -> RawFrameView<'_> {
        RawFrameView::new(self.format, self.width, self.height, &self.data)
    }
}

/// Upright RGBA frame, row-major, axes swapped relative to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFrame {
    /// Width in pixels (source height)
    pub width: usize,
    /// Height in pixels (source width)
    pub height: usize,
    /// RGBA pixel data interleaved [R, G, B, A, R, G, B, A, ...]
    pub data: Vec<u8>,
}

impl NormalizedFrame {
    pub fn channels(&self) -> usize {
        NORMALIZED_CHANNELS
    }

    /// RGBA bytes of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * NORMALIZED_CHANNELS;
        self.data.get(start..start + NORMALIZED_CHANNELS)
    }
}
