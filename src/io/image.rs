//! Image loading, export and resizing over pixel grids

use image::{ImageBuffer, Luma, Rgb, imageops};
use ndarray::{Array2, Array3};
use std::path::Path;

/// Load an image as an RGB pixel grid in row, column, channel order
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid
/// image format.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> crate::io::error::Result<Array3<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| crate::io::error::QuizError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgb = img.to_rgb8();

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let mut pixels = Array3::zeros((height, width, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let channels = pixel.0;
        for c in 0..3 {
            let value = channels.get(c).copied().unwrap_or(0);
            if let Some(cell) = pixels.get_mut((y as usize, x as usize, c)) {
                *cell = value;
            }
        }
    }
    Ok(pixels)
}

/// Resize an RGB pixel grid to the given dimensions
///
/// Uses bilinear filtering. A grid already at the requested size is
/// returned as a copy without resampling.
pub fn resize_to(pixels: &Array3<u8>, height: usize, width: usize) -> Array3<u8> {
    let (source_height, source_width, _) = pixels.dim();
    if (source_height, source_width) == (height, width) {
        return pixels.clone();
    }

    let resized = imageops::resize(
        &rgb_buffer(pixels),
        width as u32,
        height as u32,
        imageops::FilterType::Triangle,
    );
    let mut out = Array3::zeros((height, width, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let channels = pixel.0;
        for c in 0..3 {
            let value = channels.get(c).copied().unwrap_or(0);
            if let Some(cell) = out.get_mut((y as usize, x as usize, c)) {
                *cell = value;
            }
        }
    }
    out
}

/// Save an RGB pixel grid as an image file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the path
pub fn save_rgb<P: AsRef<Path>>(pixels: &Array3<u8>, path: P) -> crate::io::error::Result<()> {
    let path_buf = path.as_ref().to_path_buf();
    ensure_parent(&path_buf)?;
    rgb_buffer(pixels)
        .save(&path_buf)
        .map_err(|e| crate::io::error::QuizError::ImageSave {
            path: path_buf,
            source: e,
        })?;
    Ok(())
}

/// Save a single-channel pixel grid as a grayscale image file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the path
pub fn save_gray<P: AsRef<Path>>(pixels: &Array2<u8>, path: P) -> crate::io::error::Result<()> {
    let path_buf = path.as_ref().to_path_buf();
    ensure_parent(&path_buf)?;

    let (height, width) = pixels.dim();
    let mut buffer = ImageBuffer::new(width as u32, height as u32);
    for row in 0..height {
        for col in 0..width {
            let value = pixels.get((row, col)).copied().unwrap_or(0);
            buffer.put_pixel(col as u32, row as u32, Luma([value]));
        }
    }
    buffer
        .save(&path_buf)
        .map_err(|e| crate::io::error::QuizError::ImageSave {
            path: path_buf,
            source: e,
        })?;
    Ok(())
}

fn rgb_buffer(pixels: &Array3<u8>) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    let (height, width, _) = pixels.dim();
    let mut buffer = ImageBuffer::new(width as u32, height as u32);
    for row in 0..height {
        for col in 0..width {
            let rgb = [
                pixels.get((row, col, 0)).copied().unwrap_or(0),
                pixels.get((row, col, 1)).copied().unwrap_or(0),
                pixels.get((row, col, 2)).copied().unwrap_or(0),
            ];
            buffer.put_pixel(col as u32, row as u32, Rgb(rgb));
        }
    }
    buffer
}

fn ensure_parent(path: &Path) -> crate::io::error::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| crate::io::error::QuizError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
