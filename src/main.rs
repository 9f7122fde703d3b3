use std::sync::Arc;
use std::thread;

use arshot_capture::image_pipeline::{
    CaptureConfig, CapturePipeline, FORMAT_TAG_GRAYSCALE, FrameHolder, TiffFrameEncoder,
};
use arshot_capture::logger;
use arshot_capture::shot::{ArShotSession, ShotOutcome};
use arshot_capture::vision::{LabelDisplay, VisionApiClient, VisionConfig};

use tracing::{error, info, warn};

const DEMO_WIDTH: usize = 640;
const DEMO_HEIGHT: usize = 480;

/// Stands in for the platform camera: a grayscale frame with a diagonal gradient.
fn synthetic_frame(width: usize, height: usize, seed: usize) -> Vec<u8> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| ((x + 2 * y + seed) % 256) as u8))
        .collect()
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting arshot capture demo...");

    let config = CaptureConfig::builder()
        .jpeg_quality(90)
        .texture_size_ratio(1.0)
        .build();
    let holder = Arc::new(FrameHolder::with_size_ratio(config.texture_size_ratio));

    let pipeline = CapturePipeline::new(Arc::clone(&holder), config.clone());
    match pipeline.capture_to_vec() {
        Err(e) if e.is_not_ready() => info!("No frame yet, searching for planes..."),
        other => warn!("Unexpected capture result before any frame: {:?}", other.map(|b| b.len())),
    }

    let camera = {
        let holder = Arc::clone(&holder);
        thread::spawn(move || {
            for seed in 0..3 {
                let frame = synthetic_frame(DEMO_WIDTH, DEMO_HEIGHT, seed * 16);
                match holder.on_image_available(FORMAT_TAG_GRAYSCALE, DEMO_WIDTH, DEMO_HEIGHT, &frame) {
                    Ok(Some(size)) => info!("Texture reader size set to {}x{}", size.width, size.height),
                    Ok(None) => {}
                    Err(e) => error!("Camera frame rejected: {}", e),
                }
            }
        })
    };
    camera
        .join()
        .map_err(|_| anyhow::anyhow!("camera thread panicked"))?;

    let summary = pipeline.capture_file("capture.jpg")?;
    info!("Wrote capture.jpg ({}x{}, {} bytes)", summary.width, summary.height, summary.encoded_bytes);

    let debug_pipeline = CapturePipeline::with_custom(Arc::clone(&holder), TiffFrameEncoder, config);
    debug_pipeline.capture_file("capture.tiff")?;
    info!("Wrote capture.tiff");

    let vision_config = match VisionConfig::from_env() {
        Ok(vision_config) => vision_config,
        Err(e) => {
            warn!("Skipping labeling: {}", e);
            return Ok(());
        }
    };

    let session = ArShotSession::new(pipeline, VisionApiClient::new(vision_config)?);
    let mut label_display = LabelDisplay::default();
    match session.shoot(&mut label_display) {
        Ok(ShotOutcome::Completed) => info!("Labels:\n{}", label_display.text()),
        Ok(ShotOutcome::StillSearching) => info!("Still searching for a camera frame"),
        Err(e) => error!("Labeling failed: {}", e),
    }

    Ok(())
}
