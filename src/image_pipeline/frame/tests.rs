#[cfg(test)]
mod tests {
    use crate::image_pipeline::common::error::CaptureError;
    use crate::image_pipeline::frame::{
        FrameBufferTransformer, NormalizedFrame, PixelFormat, RawFrame, RawFrameView,
    };

    fn gray(width: usize, height: usize, data: Vec<u8>) -> RawFrame {
        RawFrame::new(PixelFormat::Grayscale, width, height, data)
    }

    fn rgba(width: usize, height: usize, data: Vec<u8>) -> RawFrame {
        RawFrame::new(PixelFormat::Rgba, width, height, data)
    }

    /// Reads a normalized frame back as an RGBA raw frame so it can be fed through again.
    fn as_rgba_source(frame: NormalizedFrame) -> RawFrame {
        rgba(frame.width, frame.height, frame.data)
    }

    #[test]
    fn test_grayscale_2x2_mapping() {
        let transformer = FrameBufferTransformer::new();
        let out = transformer.normalize(&gray(2, 2, vec![10, 20, 30, 40])).unwrap();

        // (0,0) -> 12, (0,1) -> 4, (1,0) -> 8, (1,1) -> 0
        assert_eq!(&out.data[12..16], &[10, 10, 10, 255]);
        assert_eq!(&out.data[4..8], &[20, 20, 20, 255]);
        assert_eq!(&out.data[8..12], &[30, 30, 30, 255]);
        assert_eq!(&out.data[0..4], &[40, 40, 40, 255]);
        assert_eq!(
            out.data,
            vec![40, 40, 40, 255, 20, 20, 20, 255, 30, 30, 30, 255, 10, 10, 10, 255]
        );
    }

    #[test]
    fn test_non_square_swaps_axes() {
        let transformer = FrameBufferTransformer::new();
        let out = transformer.normalize(&gray(3, 2, vec![1, 2, 3, 4, 5, 6])).unwrap();

        assert_eq!(out.width, 2);
        assert_eq!(out.height, 3);
        assert_eq!(out.data.len(), 3 * 2 * 4);

        let luma: Vec<u8> = out.data.chunks_exact(4).map(|px| px[0]).collect();
        assert_eq!(luma, vec![6, 3, 5, 2, 4, 1]);
        assert_eq!(out.pixel(0, 0), Some(&[6, 6, 6, 255][..]));
        assert_eq!(out.pixel(1, 2), Some(&[1, 1, 1, 255][..]));
        assert_eq!(out.pixel(2, 0), None);
    }

    #[test]
    fn test_rgba_channels_copied_verbatim() {
        let transformer = FrameBufferTransformer::new();
        let mut data = vec![0u8; 8];
        data[0..4].copy_from_slice(&[1, 2, 3, 4]);
        data[4..8].copy_from_slice(&[5, 6, 7, 8]);

        let out = transformer.normalize(&rgba(2, 1, data)).unwrap();

        assert_eq!(out.width, 1);
        assert_eq!(out.height, 2);
        // (0,0) -> ((2-0-1)*1 + 0) * 4 = 4, (0,1) -> 0
        assert_eq!(&out.data[4..8], &[1, 2, 3, 4]);
        assert_eq!(&out.data[0..4], &[5, 6, 7, 8]);
    }

    #[test]
    fn test_dimensions_and_length_for_various_sizes() {
        let transformer = FrameBufferTransformer::new();
        for (width, height) in [(1, 1), (4, 3), (7, 2), (16, 9)] {
            let raw = gray(width, height, vec![128; width * height]);
            let out = transformer.normalize(&raw).unwrap();
            assert_eq!(out.width, height);
            assert_eq!(out.height, width);
            assert_eq!(out.data.len(), width * height * 4);
            assert!(out.data.chunks_exact(4).all(|px| px == [128, 128, 128, 255]));
        }
    }

    #[test]
    fn test_double_application_restores_source() {
        let transformer = FrameBufferTransformer::new();
        let data: Vec<u8> = (0..4 * 4 * 4).map(|v| v as u8).collect();
        let source = rgba(4, 4, data.clone());

        let once = transformer.normalize(&source).unwrap();
        assert_ne!(once.data, data);

        let twice = transformer.normalize(&as_rgba_source(once)).unwrap();
        assert_eq!(twice.width, 4);
        assert_eq!(twice.height, 4);
        assert_eq!(twice.data, data);
    }

    #[test]
    fn test_double_application_restores_non_square_source() {
        let transformer = FrameBufferTransformer::new();
        let data: Vec<u8> = (0..5 * 3 * 4).map(|v| (v * 3) as u8).collect();

        let once = transformer.normalize(&rgba(5, 3, data.clone())).unwrap();
        let twice = transformer.normalize(&as_rgba_source(once)).unwrap();

        assert_eq!((twice.width, twice.height), (5, 3));
        assert_eq!(twice.data, data);
    }

    #[test]
    fn test_short_buffer_is_size_mismatch() {
        let transformer = FrameBufferTransformer::new();
        let result = transformer.normalize(&rgba(2, 2, vec![0u8; 2 * 2 * 4 - 1]));

        assert!(matches!(
            result,
            Err(CaptureError::BufferSizeMismatch { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn test_grayscale_buffer_sized_for_rgba_is_mismatch() {
        let transformer = FrameBufferTransformer::new();
        let result = transformer.normalize(&gray(2, 2, vec![0u8; 16]));

        assert!(matches!(result, Err(CaptureError::BufferSizeMismatch { .. })));
    }

    #[test]
    fn test_zero_width_is_invalid_dimensions() {
        let transformer = FrameBufferTransformer::new();
        let result = transformer.normalize(&gray(0, 4, Vec::new()));

        assert!(matches!(
            result,
            Err(CaptureError::InvalidDimensions { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_overflowing_dimensions_are_invalid() {
        let view = RawFrameView::new(PixelFormat::Rgba, usize::MAX, 2, &[0u8; 4]);
        let result = FrameBufferTransformer::new().normalize_view(&view);

        assert!(matches!(result, Err(CaptureError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_max_dimension_guard() {
        let transformer = FrameBufferTransformer::with_max_dimension(Some(2));
        let result = transformer.normalize(&gray(3, 1, vec![0, 0, 0]));
        assert!(matches!(
            result,
            Err(CaptureError::InvalidDimensions { width: 3, height: 1 })
        ));

        assert!(transformer.normalize(&gray(2, 2, vec![0; 4])).is_ok());
    }

    #[test]
    fn test_unknown_format_tag_is_unsupported() {
        assert_eq!(PixelFormat::from_tag(0).unwrap(), PixelFormat::Rgba);
        assert_eq!(PixelFormat::from_tag(1).unwrap(), PixelFormat::Grayscale);
        assert!(matches!(
            PixelFormat::from_tag(7),
            Err(CaptureError::UnsupportedFormat(7))
        ));
    }

    #[test]
    fn test_view_copies_bytes() {
        let mut buffer = vec![1u8, 2, 3, 4];
        let owned = RawFrameView::new(PixelFormat::Grayscale, 2, 2, &buffer).to_owned_frame();
        buffer.fill(0);

        assert_eq!(owned.data, vec![1, 2, 3, 4]);
        assert_eq!(owned.byte_count(), 4);
    }
}
