use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::image_pipeline::{
    capture::FrameHolder,
    common::error::{CaptureError, Result},
    encode::{CaptureConfig, FrameEncoder, JpegFrameEncoder},
    frame::{FrameBufferTransformer, PixelFormat},
};

/// What a successful capture produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSummary {
    pub source_format: PixelFormat,
    /// Dimensions of the encoded (upright) image
    pub width: usize,
    pub height: usize,
    pub encoded_bytes: usize,
}

/// Turns the frame currently held by a [`FrameHolder`] into encoded image bytes.
pub struct CapturePipeline<E: FrameEncoder> {
    holder: Arc<FrameHolder>,
    transformer: FrameBufferTransformer,
    encoder: E,
    config: CaptureConfig,
}

impl CapturePipeline<JpegFrameEncoder> {
    pub fn new(holder: Arc<FrameHolder>, config: CaptureConfig) -> Self {
        Self::with_custom(holder, JpegFrameEncoder, config)
    }
}

impl<E: FrameEncoder> CapturePipeline<E> {
    pub fn with_custom(holder: Arc<FrameHolder>, encoder: E, config: CaptureConfig) -> Self {
        Self {
            holder,
            transformer: FrameBufferTransformer::with_max_dimension(config.max_dimension),
            encoder,
            config,
        }
    }

    /// Captures the current frame into `output`.
    ///
    /// `NoFrameAvailable` is returned unchanged when the camera has not
    /// delivered anything yet.
    #[instrument(skip(self, output))]
    pub fn capture(&self, output: &mut dyn Write) -> Result<CaptureSummary> {
        info!("Starting frame capture");

        let raw = {
            let _span = tracing::info_span!("current_frame").entered();
            self.holder.current_frame()?
        };

        let normalized = {
            let _span = tracing::info_span!("normalize",
                format = ?raw.format,
                width = raw.width,
                height = raw.height
            ).entered();
            self.transformer.normalize(&raw)?
        };

        let mut counter = CountingWriter { inner: output, written: 0 };
        {
            let _span = tracing::info_span!("encode", content_type = self.encoder.content_type()).entered();
            self.encoder.encode(&normalized, &mut counter, &self.config)?;
        }

        let summary = CaptureSummary {
            source_format: raw.format,
            width: normalized.width,
            height: normalized.height,
            encoded_bytes: counter.written,
        };
        info!(
            width = summary.width,
            height = summary.height,
            bytes = summary.encoded_bytes,
            "Capture complete"
        );
        Ok(summary)
    }

    /// Captures the current frame into a fresh buffer, ready for upload.
    pub fn capture_to_vec(&self) -> Result<Vec<u8>> {
        self.capture_to_vec_with_summary().map(|(buffer, _)| buffer)
    }

    #[instrument(skip(self, output_path))]
    pub fn capture_file<P: AsRef<Path>>(&self, output_path: P) -> Result<CaptureSummary> {
        let output_path = output_path.as_ref();

        // Encode first so a missing frame never leaves an empty file behind
        let (encoded, summary) = self.capture_to_vec_with_summary()?;

        info!(output = %output_path.display(), "Writing capture");
        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                CaptureError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };
        output_file.write_all(&encoded)?;

        Ok(summary)
    }

    pub fn holder(&self) -> &Arc<FrameHolder> {
        &self.holder
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CaptureConfig) {
        self.transformer = FrameBufferTransformer::with_max_dimension(config.max_dimension);
        self.config = config;
    }

    fn capture_to_vec_with_summary(&self) -> Result<(Vec<u8>, CaptureSummary)> {
        let mut buffer = Vec::new();
        let summary = self.capture(&mut buffer)?;
        Ok((buffer, summary))
    }
}

struct CountingWriter<'a> {
    inner: &'a mut dyn Write,
    written: usize,
}

impl Write for CountingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
