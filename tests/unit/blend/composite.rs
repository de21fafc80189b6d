//! Tests for half-selection compositing and foreground measurement

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use quizsmith::blend::composite::{AnnotatedHalf, composite, foreground_rate};

    fn solid(height: usize, width: usize, color: [u8; 3]) -> Array3<u8> {
        let mut pixels = Array3::zeros((height, width, 3));
        for row in 0..height {
            for col in 0..width {
                for (channel, &value) in color.iter().enumerate() {
                    if let Some(cell) = pixels.get_mut((row, col, channel)) {
                        *cell = value;
                    }
                }
            }
        }
        pixels
    }

    fn half_and_half(height: usize, width: usize, left: [u8; 3], right: [u8; 3]) -> Array3<u8> {
        let mut pixels = solid(height, width, left);
        for row in 0..height {
            for col in width / 2..width {
                for (channel, &value) in right.iter().enumerate() {
                    if let Some(cell) = pixels.get_mut((row, col, channel)) {
                        *cell = value;
                    }
                }
            }
        }
        pixels
    }

    // Tests foreground rate over all-black and all-set grids
    // Verified by counting zero pixels as foreground
    #[test]
    fn test_foreground_rate_extremes() {
        assert!(foreground_rate(&solid(4, 4, [0, 0, 0])).abs() < f64::EPSILON);
        assert!((foreground_rate(&solid(4, 4, [255, 255, 255])) - 1.0).abs() < f64::EPSILON);
    }

    // Tests a pixel counts once no matter how many channels are set
    // Verified by counting each set channel separately
    #[test]
    fn test_foreground_rate_counts_pixels_not_channels() {
        let mut pixels = solid(2, 2, [0, 0, 0]);
        if let Some(cell) = pixels.get_mut((0, 0, 2)) {
            *cell = 9;
        }
        assert!((foreground_rate(&pixels) - 0.25).abs() < f64::EPSILON);
    }

    // Tests sparse annotations paste their right half
    // Verified by inverting the half choice
    #[test]
    fn test_sparse_annotation_pastes_right_half() {
        let original = solid(4, 8, [10, 10, 10]);
        let annotated = half_and_half(4, 8, [0, 0, 0], [0, 0, 255]);

        let (blended, report) = composite(&original, &annotated).expect("composite should succeed");

        assert_eq!(report.pasted_half, AnnotatedHalf::Right);
        assert_eq!(report.pasted_half.label(), "right");
        assert!((report.rate_of_foreground - 0.5).abs() < f64::EPSILON);

        // Left half of the output keeps the original pixels
        assert_eq!(blended[(0, 0, 2)], 10);
        assert_eq!(blended[(3, 3, 2)], 10);
        // Right half carries the annotated right half
        assert_eq!(blended[(0, 4, 2)], 255);
        assert_eq!(blended[(3, 7, 2)], 255);
        assert_eq!(blended[(0, 4, 0)], 0);
    }

    // Tests dense annotations paste their left half
    // Verified by pasting into the left region instead
    #[test]
    fn test_dense_annotation_pastes_left_half() {
        let original = solid(4, 8, [10, 10, 10]);
        let annotated = half_and_half(4, 8, [255, 0, 0], [0, 255, 0]);

        let (blended, report) = composite(&original, &annotated).expect("composite should succeed");

        assert_eq!(report.pasted_half, AnnotatedHalf::Left);
        assert!((report.rate_of_foreground - 1.0).abs() < f64::EPSILON);

        // Destination is still the right half of the output
        assert_eq!(blended[(0, 0, 0)], 10);
        assert_eq!(blended[(2, 5, 0)], 255);
        assert_eq!(blended[(2, 5, 1)], 0);
    }

    // Tests odd widths leave the final column untouched on the left half
    // Verified by widening the pasted region by one column
    #[test]
    fn test_odd_width_left_half_leaves_last_column() {
        let original = solid(3, 7, [10, 10, 10]);
        let annotated = solid(3, 7, [200, 200, 200]);

        let (blended, report) = composite(&original, &annotated).expect("composite should succeed");

        assert_eq!(report.pasted_half, AnnotatedHalf::Left);
        // Columns 3 through 5 take annotated pixels, column 6 keeps the original
        assert_eq!(blended[(1, 3, 0)], 200);
        assert_eq!(blended[(1, 5, 0)], 200);
        assert_eq!(blended[(1, 6, 0)], 10);
        assert_eq!(blended[(1, 2, 0)], 10);
    }

    // Tests odd widths fill the whole region on the right half
    // Verified by shrinking the pasted region by one column
    #[test]
    fn test_odd_width_right_half_fills_region() {
        let original = solid(3, 7, [10, 10, 10]);
        let annotated = solid(3, 7, [0, 0, 0]);

        let (blended, report) = composite(&original, &annotated).expect("composite should succeed");

        assert_eq!(report.pasted_half, AnnotatedHalf::Right);
        assert_eq!(blended[(1, 3, 0)], 0);
        assert_eq!(blended[(1, 6, 0)], 0);
        assert_eq!(blended[(1, 2, 0)], 10);
    }

    // Tests the annotated image is resized to the original's size
    // Verified by reporting the resized shape instead
    #[test]
    fn test_shapes_reported_before_resize() {
        let original = solid(4, 6, [10, 10, 10]);
        let annotated = solid(2, 2, [255, 255, 255]);

        let (blended, report) = composite(&original, &annotated).expect("composite should succeed");

        assert_eq!(report.original_shape, [4, 6, 3]);
        assert_eq!(report.annotated_shape, [2, 2, 3]);
        assert_eq!(blended.dim(), (4, 6, 3));
        // Uniform annotation stays uniform through the resize
        assert_eq!(blended[(0, 3, 0)], 255);
    }

    // Tests an empty original is rejected
    // Verified by compositing onto the empty grid
    #[test]
    fn test_empty_original_fails() {
        let original = Array3::<u8>::zeros((0, 0, 3));
        let annotated = solid(2, 2, [1, 2, 3]);

        assert!(composite(&original, &annotated).is_err());
    }

    // Tests the output never aliases the inputs
    // Verified by writing through to the original
    #[test]
    fn test_original_is_unchanged() {
        let original = solid(4, 8, [10, 10, 10]);
        let annotated = solid(4, 8, [250, 250, 250]);

        let (_, _) = composite(&original, &annotated).expect("composite should succeed");
        assert_eq!(original[(0, 5, 0)], 10);
    }
}
