//! Half-selection compositing of annotated images onto originals

use crate::io::configuration::FOREGROUND_SPLIT_THRESHOLD;
use ndarray::Array3;

/// Halves of the annotated image considered for pasting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotatedHalf {
    /// Columns left of the midpoint
    Left,
    /// Columns from the midpoint rightward
    Right,
}

impl AnnotatedHalf {
    /// Lowercase name for report rendering
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Shapes and foreground statistics observed while compositing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeReport {
    /// Height, width and channel count of the original image
    pub original_shape: [usize; 3],
    /// Height, width and channel count of the annotated image as loaded
    pub annotated_shape: [usize; 3],
    /// Fraction of annotated pixels with at least one non-zero channel
    pub rate_of_foreground: f64,
    /// Which half of the annotated image was pasted
    pub pasted_half: AnnotatedHalf,
}

/// Paste one half of an annotated image over the original's right-half
/// region
///
/// The annotated image is first resized to the original's dimensions.
/// Its rate of foreground decides which half is pasted: at most half
/// foreground selects the right half, otherwise the left.
/// With an odd width the left half is one column narrower than the
/// destination region, and the final column keeps the original pixels.
///
/// # Errors
///
/// Returns an error if the original image has no pixels.
pub fn composite(
    original: &Array3<u8>,
    annotated: &Array3<u8>,
) -> crate::io::error::Result<(Array3<u8>, CompositeReport)> {
    let (height, width, channels) = original.dim();
    if height == 0 || width == 0 {
        return Err(crate::io::error::invalid_parameter(
            "original image",
            &format!("{height}x{width}"),
            &"image has no pixels",
        ));
    }

    let annotated_shape = dimensions(annotated);
    let resized = crate::io::image::resize_to(annotated, height, width);
    let rate_of_foreground = foreground_rate(&resized);
    let pasted_half = if rate_of_foreground <= FOREGROUND_SPLIT_THRESHOLD {
        AnnotatedHalf::Right
    } else {
        AnnotatedHalf::Left
    };

    let split = width / 2;
    let (source_start, pasted_width) = match pasted_half {
        AnnotatedHalf::Left => (0, split),
        AnnotatedHalf::Right => (split, width - split),
    };

    let mut output = original.clone();
    for row in 0..height {
        for offset in 0..pasted_width {
            for channel in 0..channels.min(3) {
                let value = resized[(row, source_start + offset, channel)];
                if let Some(cell) = output.get_mut((row, split + offset, channel)) {
                    *cell = value;
                }
            }
        }
    }

    Ok((
        output,
        CompositeReport {
            original_shape: dimensions(original),
            annotated_shape,
            rate_of_foreground,
            pasted_half,
        },
    ))
}

/// Fraction of pixels with at least one non-zero channel
pub fn foreground_rate(pixels: &Array3<u8>) -> f64 {
    let (height, width, channels) = pixels.dim();
    if height == 0 || width == 0 {
        return 0.0;
    }
    let mut foreground = 0usize;
    for row in 0..height {
        for col in 0..width {
            if (0..channels).any(|channel| pixels[(row, col, channel)] != 0) {
                foreground += 1;
            }
        }
    }
    foreground as f64 / (height * width) as f64
}

fn dimensions(pixels: &Array3<u8>) -> [usize; 3] {
    let (height, width, channels) = pixels.dim();
    [height, width, channels]
}
