//! Bitmap source selection.

use std::path::PathBuf;

use relief_extrude::BitGrid;
use tracing::debug;

use crate::error::BitmapResult;
use crate::raster::image_grid;
use crate::style::{stylize, ModuleStyle};
use crate::symbol::encode_text;

/// Knobs shared by the bitmap sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapParams {
    /// Quiet-zone width around code symbols, in modules.
    pub border: usize,

    /// Luma cutoff for image thresholding; pixels below it are on.
    pub threshold: u8,

    /// Raster pixels per module for styled symbols.
    pub scale: usize,
}

impl Default for BitmapParams {
    fn default() -> Self {
        Self {
            border: 4,
            threshold: 128,
            scale: 8,
        }
    }
}

/// Where the source bitmap comes from.
///
/// Style and source selection are fully resolved here; the extrusion
/// core only ever sees the resulting [`BitGrid`].
///
/// # Example
///
/// ```
/// use relief_bitmap::{BitmapParams, BitmapSource};
///
/// let source = BitmapSource::Url {
///     text: "https://example.com/".into(),
/// };
/// let grid = source.resolve(&BitmapParams::default()).unwrap();
/// assert!(!grid.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapSource {
    /// A code symbol encoding the given text or URL.
    Url {
        /// Payload to encode.
        text: String,
    },
    /// A thresholded raster image file.
    Image {
        /// Path to the image.
        path: PathBuf,
    },
    /// A code symbol rasterized with round modules.
    StyledRound {
        /// Payload to encode.
        text: String,
    },
    /// A code symbol rasterized with linked-line modules.
    StyledLine {
        /// Payload to encode.
        text: String,
    },
}

impl BitmapSource {
    /// Build the source bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError`](crate::BitmapError) if encoding or image
    /// decoding fails.
    pub fn resolve(&self, params: &BitmapParams) -> BitmapResult<BitGrid> {
        let grid = match self {
            Self::Url { text } => encode_text(text, params.border)?,
            Self::Image { path } => image_grid(path, params.threshold)?,
            Self::StyledRound { text } => stylize(
                &encode_text(text, params.border)?,
                ModuleStyle::Round,
                params.scale,
            ),
            Self::StyledLine { text } => stylize(
                &encode_text(text, params.border)?,
                ModuleStyle::Line,
                params.scale,
            ),
        };
        debug!(rows = grid.rows(), cols = grid.cols(), "resolved bitmap source");
        Ok(grid)
    }
}
