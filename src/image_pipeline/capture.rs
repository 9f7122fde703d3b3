//! Frame capture module
//!
//! Bridges asynchronous frame notifications and synchronous capture requests.

mod holder;

#[cfg(test)]
mod tests;

pub use holder::{CaptureSize, FrameHolder};
