#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use crate::image_pipeline::capture::{CaptureSize, FrameHolder};
    use crate::image_pipeline::common::error::CaptureError;
    use crate::image_pipeline::frame::{FORMAT_TAG_GRAYSCALE, FORMAT_TAG_RGBA, PixelFormat};

    #[test]
    fn test_empty_holder_has_no_frame() {
        let holder = FrameHolder::new();

        assert!(!holder.has_frame());
        let err = holder.current_frame().unwrap_err();
        assert!(matches!(err, CaptureError::NoFrameAvailable));
        assert!(err.is_not_ready());
    }

    #[test]
    fn test_last_frame_wins() {
        let holder = FrameHolder::new();
        holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 2, 1, &[1, 2])
            .unwrap();
        holder
            .on_image_available(FORMAT_TAG_RGBA, 1, 1, &[9, 8, 7, 6])
            .unwrap();

        let frame = holder.current_frame().unwrap();
        assert_eq!(frame.format, PixelFormat::Rgba);
        assert_eq!((frame.width, frame.height), (1, 1));
        assert_eq!(frame.data, vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_capture_size_reported_once() {
        let holder = FrameHolder::new();

        let first = holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 4, 2, &[0; 8])
            .unwrap();
        let second = holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 4, 2, &[0; 8])
            .unwrap();

        assert_eq!(first, Some(CaptureSize { width: 4, height: 2 }));
        assert_eq!(second, None);
    }

    #[test]
    fn test_invalid_frame_does_not_consume_size_report() {
        let holder = FrameHolder::new();

        assert!(holder.on_image_available(FORMAT_TAG_GRAYSCALE, 4, 2, &[]).is_err());
        let size = holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 4, 2, &[0; 8])
            .unwrap();

        assert_eq!(size, Some(CaptureSize { width: 4, height: 2 }));
    }

    #[test]
    fn test_capture_size_uses_ratio() {
        let holder = FrameHolder::with_size_ratio(0.5);
        let size = holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 5, 4, &[0; 20])
            .unwrap();

        assert_eq!(size, Some(CaptureSize { width: 2, height: 2 }));
    }

    #[test]
    fn test_invalid_notification_clears_slot() {
        let holder = FrameHolder::new();
        holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 1, 1, &[5])
            .unwrap();

        let err = holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 2, 2, &[0; 3])
            .unwrap_err();
        assert!(matches!(err, CaptureError::BufferSizeMismatch { expected: 4, actual: 3 }));
        assert!(matches!(holder.current_frame(), Err(CaptureError::NoFrameAvailable)));

        let err = holder.on_image_available(42, 1, 1, &[5]).unwrap_err();
        assert!(matches!(err, CaptureError::UnsupportedFormat(42)));
        assert!(!holder.has_frame());
    }

    #[test]
    fn test_reset_clears_and_rearms_size_report() {
        let holder = FrameHolder::new();
        holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 1, 1, &[5])
            .unwrap();

        holder.reset();
        assert!(!holder.has_frame());

        let size = holder
            .on_image_available(FORMAT_TAG_GRAYSCALE, 1, 1, &[6])
            .unwrap();
        assert_eq!(size, Some(CaptureSize { width: 1, height: 1 }));
    }

    #[test]
    fn test_frames_from_capture_thread_are_never_torn() {
        let holder = Arc::new(FrameHolder::new());
        let writer = {
            let holder = Arc::clone(&holder);
            thread::spawn(move || {
                for n in 0..500u32 {
                    let side = (n % 4 + 1) as usize;
                    let fill = (n % 251) as u8;
                    let data = vec![fill; side * side];
                    holder
                        .on_image_available(FORMAT_TAG_GRAYSCALE, side, side, &data)
                        .unwrap();
                }
            })
        };

        for _ in 0..500 {
            if let Ok(frame) = holder.current_frame() {
                assert_eq!(frame.data.len(), frame.width * frame.height);
                assert!(frame.data.iter().all(|&b| b == frame.data[0]));
            }
        }
        writer.join().unwrap();
        assert!(holder.has_frame());
    }
}
