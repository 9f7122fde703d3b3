//! Pipeline conversions module
//!
//! This module contains orchestration logic from held camera frame to encoded upload.

mod frame_capture;


pub use frame_capture::{CapturePipeline, CaptureSummary};
