//! Raster-image thresholding.

// Image dimensions fit usize and grid dimensions fit u32 by construction
#![allow(clippy::cast_possible_truncation)]

use std::path::Path;

use image::GrayImage;
use relief_extrude::BitGrid;
use tracing::debug;

use crate::error::BitmapResult;

/// Load a raster image and threshold it into a bit grid.
///
/// The image is converted to grayscale first; pixels darker than
/// `threshold` become on cells. Grid rows follow image rows, so the
/// extruded model reads the same way up as the picture.
///
/// # Errors
///
/// Returns [`BitmapError::Image`](crate::BitmapError::Image) if the
/// file cannot be opened or decoded.
pub fn image_grid<P: AsRef<Path>>(path: P, threshold: u8) -> BitmapResult<BitGrid> {
    let image = image::open(path)?.to_luma8();
    debug!(
        width = image.width(),
        height = image.height(),
        threshold,
        "thresholding raster image"
    );
    Ok(binarize(&image, threshold))
}

/// Threshold a grayscale image into a bit grid.
///
/// A pixel is on iff its luma is strictly below `threshold`, so a
/// threshold of 0 yields an all-off grid and 255 turns everything but
/// pure white on.
#[must_use]
pub fn binarize(image: &GrayImage, threshold: u8) -> BitGrid {
    let (width, height) = image.dimensions();
    BitGrid::from_fn(height as usize, width as usize, |row, col| {
        image.get_pixel(col as u32, row as u32).0[0] < threshold
    })
}
