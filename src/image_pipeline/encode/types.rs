//! Capture and encoding configuration types

/// Quality used when none is configured; matches the platform JPEG default.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// TIFF compression methods for lossless debug captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, fast level
    Deflate,
}

/// Configuration for turning the current camera frame into an upload
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
    /// Compression used by the TIFF encoder
    pub tiff_compression: TiffCompression,
    /// Predictor value for TIFF compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Frames wider or taller than this are rejected before normalization
    pub max_dimension: Option<usize>,
    /// Fraction of the camera resolution requested from the texture reader
    pub texture_size_ratio: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            tiff_compression: TiffCompression::Lzw,
            predictor: None,
            max_dimension: Some(8192),
            texture_size_ratio: 1.0,
        }
    }
}

impl CaptureConfig {
    pub fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::default()
    }
}

/// Builder for CaptureConfig
#[derive(Default)]
pub struct CaptureConfigBuilder {
    jpeg_quality: Option<u8>,
    tiff_compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    max_dimension: Option<Option<usize>>,
    texture_size_ratio: Option<f32>,
}

impl CaptureConfigBuilder {
    /// Out-of-range values are clamped into 1..=100.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn tiff_compression(mut self, compression: TiffCompression) -> Self {
        self.tiff_compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn texture_size_ratio(mut self, ratio: f32) -> Self {
        self.texture_size_ratio = Some(ratio);
        self
    }

    pub fn build(self) -> CaptureConfig {
        let default = CaptureConfig::default();
        CaptureConfig {
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            tiff_compression: self.tiff_compression.unwrap_or(default.tiff_compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            texture_size_ratio: self.texture_size_ratio.unwrap_or(default.texture_size_ratio),
        }
    }
}
