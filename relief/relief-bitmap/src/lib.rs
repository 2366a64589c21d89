//! Bitmap sources for the relief extrusion pipeline.
//!
//! The extrusion core consumes a plain
//! [`BitGrid`](relief_extrude::BitGrid); this crate builds that grid
//! from the places it can come from:
//!
//! - [`encode_text`] - code-symbol module matrix from text or a URL
//! - [`image_grid`] / [`binarize`] - thresholded grayscale raster
//! - [`stylize`] - blow a module grid up with round or linked-line
//!   module shapes
//! - [`BitmapSource`] - the tagged selector the CLI dispatches on
//!
//! All style and source decisions are made here, before extrusion; the
//! extrusion core only ever sees a finished grid.
//!
//! # Example
//!
//! ```
//! use relief_bitmap::{BitmapParams, BitmapSource};
//! use relief_extrude::{extrude_grid, ExtrudeParams};
//!
//! let source = BitmapSource::Url {
//!     text: "https://example.com/".into(),
//! };
//! let grid = source.resolve(&BitmapParams::default()).unwrap();
//! let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod raster;
mod source;
mod style;
mod symbol;

pub use error::{BitmapError, BitmapResult};
pub use raster::{binarize, image_grid};
pub use source::{BitmapParams, BitmapSource};
pub use style::{stylize, ModuleStyle};
pub use symbol::encode_text;
