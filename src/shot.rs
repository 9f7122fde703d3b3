//! One tap: capture the current camera frame, label it, fill the result panel.

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{CaptureError, CapturePipeline, FrameEncoder};
use crate::vision::{LabelDisplay, LabelError, LabelService};


#[derive(Error, Debug)]
pub enum ShotError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Label(#[from] LabelError),
}

/// How a capture request ended, from the user's point of view.
#[derive(Debug)]
pub enum ShotOutcome {
    /// No camera frame yet; keep showing the "searching" hint.
    StillSearching,
    /// The panel now shows labels or the failure message.
    Completed,
}

pub struct ArShotSession<E: FrameEncoder, S: LabelService> {
    pipeline: CapturePipeline<E>,
    service: S,
}

impl<E: FrameEncoder, S: LabelService> ArShotSession<E, S> {
    pub fn new(pipeline: CapturePipeline<E>, service: S) -> Self {
        Self { pipeline, service }
    }

    pub fn pipeline(&self) -> &CapturePipeline<E> {
        &self.pipeline
    }

    /// Whether a capture would find a frame; drives the "searching" hint.
    pub fn is_ready(&self) -> bool {
        self.pipeline.holder().has_frame()
    }

    /// Captures and labels the current frame, updating `display`.
    ///
    /// A missing frame leaves `display` untouched. Any other failure is shown
    /// on the panel and also returned so the caller can log it; the user can
    /// simply tap again.
    #[instrument(skip(self, display))]
    pub fn shoot(&self, display: &mut LabelDisplay) -> Result<ShotOutcome, ShotError> {
        let image = match self.pipeline.capture_to_vec() {
            Ok(image) => image,
            Err(e) if e.is_not_ready() => {
                info!("No camera frame yet, still searching");
                return Ok(ShotOutcome::StillSearching);
            }
            Err(e) => {
                warn!("Capture failed: {}", e);
                display.fail(e.to_string());
                return Err(e.into());
            }
        };

        display.start_query();
        match self.service.annotate(&image) {
            Ok(labels) => {
                display.complete(Ok(labels));
                Ok(ShotOutcome::Completed)
            }
            Err(e) => {
                warn!("Labeling failed: {}", e);
                display.fail(e.to_string());
                Err(e.into())
            }
        }
    }
}
