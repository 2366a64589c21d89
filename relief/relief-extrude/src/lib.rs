//! Bitmap-to-solid extrusion engine.
//!
//! Converts a rectangular grid of binary cells into a triangle mesh by
//! emitting one axis-aligned cuboid per active cell. The pipeline is
//! `extract → emit → assemble`, wrapped by [`extrude_grid`]:
//!
//! - [`BitGrid`] holds the source bitmap and yields active cells in
//!   row-major order.
//! - [`emit_cells`] turns active cells into vertex and face sequences,
//!   8 vertices and 12 triangles per cell, with a fixed winding.
//! - [`assemble`] packages the sequences into an
//!   [`IndexedMesh`](relief_types::IndexedMesh).
//!
//! # Geometry contract
//!
//! Cell `(row, col)` occupies the footprint
//! `[col·pitch, (col+1)·pitch] × [row·pitch, (row+1)·pitch]` in the XY
//! plane and extrudes from `z = 0` to `z = depth`. The pixel pitch is
//! the physical model size divided by the longer grid dimension. Cuboids
//! of touching cells share coordinates but never vertices: each cell
//! contributes its own 8 vertices, so vertex `k·8` is always the first
//! vertex of the `k`-th active cell.
//!
//! # Example
//!
//! ```
//! use relief_extrude::{extrude_grid, BitGrid, ExtrudeParams};
//!
//! let grid = BitGrid::from_rows(vec![
//!     vec![true, false],
//!     vec![false, true],
//! ]).unwrap();
//!
//! let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
//! assert_eq!(mesh.vertex_count(), 16);
//! assert_eq!(mesh.face_count(), 24);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod emit;
mod error;
mod grid;
mod params;

pub use emit::{assemble, emit_cells, extrude_grid, FACES_PER_CELL, VERTICES_PER_CELL};
pub use error::{ExtrudeError, ExtrudeResult};
pub use grid::{BitGrid, CellIndex};
pub use params::ExtrudeParams;
