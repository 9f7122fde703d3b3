//! Camera frame module
//!
//! Frame types as delivered by the platform image stream, and the transform
//! that turns them into upright RGBA frames.

mod transformer;
pub mod types;

#[cfg(test)]
mod tests;

pub use transformer::FrameBufferTransformer;
pub use types::{
    FORMAT_TAG_GRAYSCALE, FORMAT_TAG_RGBA, NORMALIZED_CHANNELS, NormalizedFrame, PixelFormat,
    RawFrame, RawFrameView,
};
