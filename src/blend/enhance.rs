//! Grayscale conversion and contrast-limited adaptive histogram equalization

use crate::io::configuration::{DEFAULT_CLIP_LIMIT, DEFAULT_TILE_GRID};
use ndarray::{Array2, Array3};

const HISTOGRAM_BINS: usize = 256;

/// Convert an RGB pixel grid to single-channel luma (Rec. 601 weights)
pub fn grayscale(pixels: &Array3<u8>) -> Array2<u8> {
    let (height, width, _) = pixels.dim();
    let mut gray = Array2::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            let red = f64::from(pixels.get((row, col, 0)).copied().unwrap_or(0));
            let green = f64::from(pixels.get((row, col, 1)).copied().unwrap_or(0));
            let blue = f64::from(pixels.get((row, col, 2)).copied().unwrap_or(0));
            let luma = 0.299f64.mul_add(red, 0.587f64.mul_add(green, 0.114 * blue));
            if let Some(cell) = gray.get_mut((row, col)) {
                *cell = luma.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    gray
}

/// Equalize a grayscale grid tile by tile under a clipped histogram
///
/// The image is covered by a `tile_grid` by `tile_grid` lattice of
/// near-equal tiles. Each tile's histogram is clipped at
/// `clip_limit * tile_area / 256` with the excess redistributed evenly,
/// then turned into a cumulative value mapping. Output pixels blend the
/// mappings of the four nearest tile centers bilinearly; pixels outside
/// the outermost centers clamp to the edge tile's mapping.
///
/// # Errors
///
/// Returns an error if `tile_grid` is zero or `clip_limit` is not
/// positive.
pub fn equalize_adaptive(
    gray: &Array2<u8>,
    clip_limit: f64,
    tile_grid: usize,
) -> crate::io::error::Result<Array2<u8>> {
    if tile_grid == 0 {
        return Err(crate::io::error::invalid_parameter(
            "tile_grid",
            &tile_grid,
            &"tile grid needs at least one tile per axis",
        ));
    }
    if clip_limit <= 0.0 {
        return Err(crate::io::error::invalid_parameter(
            "clip_limit",
            &clip_limit,
            &"clip limit must be positive",
        ));
    }

    let (height, width) = gray.dim();
    if height == 0 || width == 0 {
        return Ok(gray.clone());
    }

    // Tiles never shrink below one pixel per axis
    let grid = tile_grid.min(height).min(width);
    let row_bounds = axis_bounds(height, grid);
    let col_bounds = axis_bounds(width, grid);
    let mappings = tile_mappings(gray, &row_bounds, &col_bounds, clip_limit);

    let row_blend = axis_blend(&row_bounds, height);
    let col_blend = axis_blend(&col_bounds, width);

    let mut output = Array2::zeros((height, width));
    for row in 0..height {
        let (row_low, row_high, row_weight) = row_blend.get(row).copied().unwrap_or((0, 0, 0.0));
        for col in 0..width {
            let (col_low, col_high, col_weight) =
                col_blend.get(col).copied().unwrap_or((0, 0, 0.0));
            let value = usize::from(gray[(row, col)]);

            let top_left = f64::from(mappings[(row_low, col_low, value)]);
            let top_right = f64::from(mappings[(row_low, col_high, value)]);
            let bottom_left = f64::from(mappings[(row_high, col_low, value)]);
            let bottom_right = f64::from(mappings[(row_high, col_high, value)]);

            let top = (1.0 - col_weight).mul_add(top_left, col_weight * top_right);
            let bottom = (1.0 - col_weight).mul_add(bottom_left, col_weight * bottom_right);
            let blended = (1.0 - row_weight).mul_add(top, row_weight * bottom);

            if let Some(cell) = output.get_mut((row, col)) {
                *cell = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

/// Grayscale conversion followed by adaptive equalization with the
/// default clip limit and tile grid
///
/// # Errors
///
/// Propagates parameter errors from the equalization stage.
pub fn enhance(pixels: &Array3<u8>) -> crate::io::error::Result<Array2<u8>> {
    let gray = grayscale(pixels);
    equalize_adaptive(&gray, DEFAULT_CLIP_LIMIT, DEFAULT_TILE_GRID)
}

// Tile boundaries covering an axis with near-equal spans
fn axis_bounds(length: usize, grid: usize) -> Vec<usize> {
    (0..=grid).map(|i| i * length / grid).collect()
}

// Per-tile cumulative value mappings under the clipped histogram
fn tile_mappings(
    gray: &Array2<u8>,
    row_bounds: &[usize],
    col_bounds: &[usize],
    clip_limit: f64,
) -> Array3<u8> {
    let grid_rows = row_bounds.len().saturating_sub(1);
    let grid_cols = col_bounds.len().saturating_sub(1);
    let mut mappings = Array3::zeros((grid_rows, grid_cols, HISTOGRAM_BINS));

    for tile_row in 0..grid_rows {
        let row_start = row_bounds.get(tile_row).copied().unwrap_or(0);
        let row_end = row_bounds.get(tile_row + 1).copied().unwrap_or(row_start);
        for tile_col in 0..grid_cols {
            let col_start = col_bounds.get(tile_col).copied().unwrap_or(0);
            let col_end = col_bounds.get(tile_col + 1).copied().unwrap_or(col_start);

            let mut histogram = [0usize; HISTOGRAM_BINS];
            for row in row_start..row_end {
                for col in col_start..col_end {
                    let value = usize::from(gray[(row, col)]);
                    if let Some(bin) = histogram.get_mut(value) {
                        *bin += 1;
                    }
                }
            }

            let area = (row_end - row_start) * (col_end - col_start);
            clip_histogram(&mut histogram, clip_limit, area);

            let mut cumulative = 0usize;
            for (bin, &count) in histogram.iter().enumerate() {
                cumulative += count;
                let level = if area == 0 {
                    0.0
                } else {
                    255.0 * cumulative as f64 / area as f64
                };
                if let Some(cell) = mappings.get_mut((tile_row, tile_col, bin)) {
                    *cell = level.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
    mappings
}

// Clip counts above the scaled limit and redistribute the excess evenly
fn clip_histogram(histogram: &mut [usize; HISTOGRAM_BINS], clip_limit: f64, area: usize) {
    if area == 0 {
        return;
    }
    let limit = ((clip_limit * area as f64) / HISTOGRAM_BINS as f64).max(1.0) as usize;
    let mut excess = 0usize;
    for count in histogram.iter_mut() {
        if *count > limit {
            excess += *count - limit;
            *count = limit;
        }
    }

    let batch = excess / HISTOGRAM_BINS;
    let residual = excess % HISTOGRAM_BINS;
    for count in histogram.iter_mut() {
        *count += batch;
    }
    for count in histogram.iter_mut().take(residual) {
        *count += 1;
    }
}

// Per-coordinate tile pair and blend weight between neighboring centers
fn axis_blend(bounds: &[usize], length: usize) -> Vec<(usize, usize, f64)> {
    let tiles = bounds.len().saturating_sub(1);
    let centers: Vec<f64> = (0..tiles)
        .map(|tile| {
            let start = bounds.get(tile).copied().unwrap_or(0);
            let end = bounds.get(tile + 1).copied().unwrap_or(start);
            (start + end) as f64 / 2.0
        })
        .collect();

    (0..length)
        .map(|position| {
            let coordinate = position as f64 + 0.5;
            let Some((&first, &last)) = centers.first().zip(centers.last()) else {
                return (0, 0, 0.0);
            };
            if coordinate <= first {
                return (0, 0, 0.0);
            }
            if coordinate >= last {
                return (tiles - 1, tiles - 1, 0.0);
            }

            let mut low = 0;
            for (tile, &center) in centers.iter().enumerate() {
                if center <= coordinate {
                    low = tile;
                } else {
                    break;
                }
            }
            let high = (low + 1).min(tiles - 1);
            let low_center = centers.get(low).copied().unwrap_or(first);
            let high_center = centers.get(high).copied().unwrap_or(last);
            let span = high_center - low_center;
            let weight = if span > 0.0 {
                (coordinate - low_center) / span
            } else {
                0.0
            };
            (low, high, weight)
        })
        .collect()
}
