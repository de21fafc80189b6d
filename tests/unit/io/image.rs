//! Tests for image loading, resizing, and export over pixel grids

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3};
    use quizsmith::io::image::{load_rgb, resize_to, save_gray, save_rgb};
    use tempfile::TempDir;

    fn checker(height: usize, width: usize) -> Array3<u8> {
        let mut pixels = Array3::zeros((height, width, 3));
        for row in 0..height {
            for col in 0..width {
                if (row + col) % 2 == 0 {
                    for channel in 0..3 {
                        if let Some(cell) = pixels.get_mut((row, col, channel)) {
                            *cell = 255;
                        }
                    }
                }
            }
        }
        pixels
    }

    // Tests a saved grid loads back with identical pixels
    // Verified by saving with channels swapped
    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().expect("temp dir should create");
        let path = dir.path().join("grid.png");

        let pixels = checker(4, 6);
        save_rgb(&pixels, &path).expect("save should succeed");

        let loaded = load_rgb(&path).expect("load should succeed");
        assert_eq!(loaded.dim(), (4, 6, 3));
        assert_eq!(loaded, pixels);
    }

    // Tests loading a missing file reports the path
    // Verified by returning a default image instead
    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().expect("temp dir should create");
        let result = load_rgb(dir.path().join("absent.png"));

        let error = result.err().expect("load should fail");
        assert!(error.to_string().contains("absent.png"));
    }

    // Tests saving creates missing parent directories
    // Verified by requiring the parent to exist
    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir should create");
        let path = dir.path().join("nested/deep/grid.png");

        save_rgb(&checker(2, 2), &path).expect("save should succeed");
        assert!(path.exists());
    }

    // Tests resizing reaches the requested dimensions
    // Verified by returning the source dimensions
    #[test]
    fn test_resize_changes_dimensions() {
        let pixels = checker(4, 4);
        let resized = resize_to(&pixels, 8, 2);
        assert_eq!(resized.dim(), (8, 2, 3));
    }

    // Tests resizing to the current size copies the grid
    // Verified by resampling at equal dimensions
    #[test]
    fn test_resize_to_same_size_is_identity() {
        let pixels = checker(3, 5);
        let resized = resize_to(&pixels, 3, 5);
        assert_eq!(resized, pixels);
    }

    // Tests a uniform grid stays uniform through resampling
    // Verified by introducing edge artifacts
    #[test]
    fn test_resize_preserves_uniform_color() {
        let mut pixels = Array3::zeros((4, 4, 3));
        pixels.fill(200);

        let resized = resize_to(&pixels, 2, 2);
        for value in &resized {
            assert_eq!(*value, 200);
        }
    }

    // Tests grayscale grids save and reload through the RGB loader
    // Verified by saving the transpose
    #[test]
    fn test_save_gray_round_trip() {
        let dir = TempDir::new().expect("temp dir should create");
        let path = dir.path().join("gray.png");

        let mut gray = Array2::zeros((3, 4));
        for row in 0..3 {
            for col in 0..4 {
                if let Some(cell) = gray.get_mut((row, col)) {
                    *cell = (row * 60 + col * 10) as u8;
                }
            }
        }
        save_gray(&gray, &path).expect("save should succeed");

        let loaded = load_rgb(&path).expect("load should succeed");
        assert_eq!(loaded.dim(), (3, 4, 3));
        for row in 0..3 {
            for col in 0..4 {
                let expected = gray[(row, col)];
                for channel in 0..3 {
                    assert_eq!(loaded[(row, col, channel)], expected);
                }
            }
        }
    }
}
