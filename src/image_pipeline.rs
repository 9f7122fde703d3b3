//! Camera frame pipeline module
//!
//! This module takes frames from the platform image stream to encoded images,
//! with separate modules for frame types and normalization, the capture slot,
//! encoders, and capture orchestration.

pub mod frame;
pub mod capture;
pub mod encode;
pub mod conversions;
pub mod common;

pub use common::{
    CaptureError,
    Result,
};

pub use frame::{
    FrameBufferTransformer,
    NormalizedFrame,
    PixelFormat,
    RawFrame,
    RawFrameView,
    FORMAT_TAG_GRAYSCALE,
    FORMAT_TAG_RGBA,
};

pub use capture::{
    CaptureSize,
    FrameHolder,
};

pub use encode::{
    CaptureConfig,
    CaptureConfigBuilder,
    FrameEncoder,
    JpegFrameEncoder,
    TiffCompression,
    TiffFrameEncoder,
};

pub use conversions::{
    CapturePipeline,
    CaptureSummary,
};
