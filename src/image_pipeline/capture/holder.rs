//! Last-frame-wins slot between the platform image callback and capture requests.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::image_pipeline::common::error::{CaptureError, Result};
use crate::image_pipeline::frame::{PixelFormat, RawFrame, RawFrameView};

/// Capture resolution to configure on the platform texture reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSize {
    pub width: usize,
    pub height: usize,
}

impl CaptureSize {
    /// Scales a camera resolution, truncating like an integer cast.
    pub fn scaled(width: usize, height: usize, ratio: f32) -> Self {
        Self {
            width: (width as f32 * ratio) as usize,
            height: (height as f32 * ratio) as usize,
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    frame: Option<RawFrame>,
    size_reported: bool,
}

/// Holds the most recent camera frame.
///
/// Platform callbacks write through [`FrameHolder::on_image_available`] from
/// their own thread; the borrowed buffer is copied before the call returns.
/// Readers get a clone of whatever frame is current.
#[derive(Debug)]
pub struct FrameHolder {
    slot: Mutex<Slot>,
    size_ratio: f32,
}

impl Default for FrameHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHolder {
    pub fn new() -> Self {
        Self::with_size_ratio(1.0)
    }

    /// `ratio` scales the capture size reported for the first frame.
    pub fn with_size_ratio(ratio: f32) -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
            size_ratio: ratio,
        }
    }

    /// Platform callback entry point.
    ///
    /// Returns `Some(CaptureSize)` for the first valid frame since creation or
    /// the last [`reset`](Self::reset), `None` afterwards. An empty or invalid
    /// notification clears the slot and returns the error.
    pub fn on_image_available(
        &self,
        format_tag: u32,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<Option<CaptureSize>> {
        let format = match PixelFormat::from_tag(format_tag) {
            Ok(format) => format,
            Err(e) => {
                self.clear();
                warn!("Dropping camera frame: {}", e);
                return Err(e);
            }
        };
        self.publish(RawFrameView::new(format, width, height, data))
    }

    /// Replaces the current frame with an owned copy of `view`.
    pub fn publish(&self, view: RawFrameView<'_>) -> Result<Option<CaptureSize>> {
        if let Err(e) = view.validate() {
            self.clear();
            warn!("Dropping camera frame: {}", e);
            return Err(e);
        }

        // Copy outside the lock so readers are never blocked on the memcpy
        let frame = view.to_owned_frame();

        let mut slot = self.slot.lock();
        slot.frame = Some(frame);
        if slot.size_reported {
            return Ok(None);
        }
        slot.size_reported = true;
        drop(slot);

        let size = CaptureSize::scaled(view.width, view.height, self.size_ratio);
        info!(
            width = size.width,
            height = size.height,
            "First camera frame received, reporting capture size"
        );
        Ok(Some(size))
    }

    /// The latest frame, or `NoFrameAvailable` if there is none.
    pub fn current_frame(&self) -> Result<RawFrame> {
        self.slot
            .lock()
            .frame
            .clone()
            .ok_or(CaptureError::NoFrameAvailable)
    }

    pub fn has_frame(&self) -> bool {
        self.slot.lock().frame.is_some()
    }

    /// Session restart: forget the frame and report the capture size again.
    pub fn reset(&self) {
        let mut slot = self.slot.lock();
        slot.frame = None;
        slot.size_reported = false;
        debug!("Frame holder reset");
    }

    fn clear(&self) {
        self.slot.lock().frame = None;
    }
}
