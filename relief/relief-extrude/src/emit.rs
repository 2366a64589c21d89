//! Cuboid emission and mesh assembly.

// Cell coordinates are far below 2^52 and vertex counts fit u32
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use relief_types::{IndexedMesh, Vertex};
use tracing::{debug, info};

use crate::error::ExtrudeResult;
use crate::grid::{BitGrid, CellIndex};
use crate::params::ExtrudeParams;

/// Vertices emitted per active cell.
pub const VERTICES_PER_CELL: usize = 8;

/// Triangles emitted per active cell.
pub const FACES_PER_CELL: usize = 12;

/// Face table of one cuboid, as local indices into its 8 vertices.
///
/// Two triangles per side, in the order base, cap, then the four walls
/// at y = y1, x = x2, y = y2, x = x1. Downstream consumers infer
/// solidity from this winding, so the table is fixed: reordering or
/// re-winding it changes the output contract even where the positions
/// stay the same.
const CELL_FACES: [[u32; 3]; FACES_PER_CELL] = [
    [0, 1, 2],
    [0, 2, 3],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [1, 2, 6],
    [1, 6, 5],
    [2, 3, 7],
    [2, 7, 6],
    [3, 0, 4],
    [3, 4, 7],
];

/// Emit cuboid geometry for a sequence of active cells.
///
/// Cells are processed in input order. Each cell contributes exactly
/// [`VERTICES_PER_CELL`] vertices (the four footprint corners at
/// `z = 0` then the same four at `z = depth`, each level in the order
/// `x1,y1`, `x2,y1`, `x2,y2`, `x1,y2`) and exactly [`FACES_PER_CELL`]
/// triangles referencing them through a base offset of 8 per preceding
/// cell.
///
/// There is no merging, deduplication, or degenerate filtering: a pitch
/// or depth of zero yields flat geometry without error, and touching
/// cells duplicate their shared boundary positions.
#[must_use]
pub fn emit_cells(
    cells: &[CellIndex],
    pixel_pitch: f64,
    depth: f64,
) -> (Vec<Vertex>, Vec<[u32; 3]>) {
    let mut vertices = Vec::with_capacity(cells.len() * VERTICES_PER_CELL);
    let mut faces = Vec::with_capacity(cells.len() * FACES_PER_CELL);

    for cell in cells {
        let x1 = cell.col as f64 * pixel_pitch;
        let y1 = cell.row as f64 * pixel_pitch;
        let x2 = (cell.col + 1) as f64 * pixel_pitch;
        let y2 = (cell.row + 1) as f64 * pixel_pitch;

        let base = vertices.len() as u32;
        vertices.push(Vertex::from_coords(x1, y1, 0.0));
        vertices.push(Vertex::from_coords(x2, y1, 0.0));
        vertices.push(Vertex::from_coords(x2, y2, 0.0));
        vertices.push(Vertex::from_coords(x1, y2, 0.0));
        vertices.push(Vertex::from_coords(x1, y1, depth));
        vertices.push(Vertex::from_coords(x2, y1, depth));
        vertices.push(Vertex::from_coords(x2, y2, depth));
        vertices.push(Vertex::from_coords(x1, y2, depth));

        for [a, b, c] in CELL_FACES {
            faces.push([base + a, base + b, base + c]);
        }
    }

    (vertices, faces)
}

/// Package vertex and face sequences into a mesh.
///
/// Purely structural; no geometric computation happens here. The
/// in-bounds invariant (every face index is less than the vertex count)
/// holds by construction for [`emit_cells`] output and is
/// debug-asserted.
#[must_use]
pub fn assemble(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> IndexedMesh {
    debug_assert!(
        faces
            .iter()
            .flatten()
            .all(|&index| (index as usize) < vertices.len()),
        "face index out of bounds"
    );
    IndexedMesh::from_parts(vertices, faces)
}

/// Extrude a bitmap grid into a triangle mesh.
///
/// Runs the full pipeline: parameter validation, active-cell extraction
/// in row-major order, cuboid emission, and assembly. The whole run is
/// synchronous and touches no state outside its arguments.
///
/// An empty grid (zero rows or zero columns) produces an empty mesh;
/// that is a valid input, not an error.
///
/// # Errors
///
/// Returns [`ExtrudeError`](crate::ExtrudeError) if the parameters fail
/// validation. No geometry is emitted on failure.
///
/// # Example
///
/// ```
/// use relief_extrude::{extrude_grid, BitGrid, ExtrudeParams};
///
/// let grid = BitGrid::from_rows(vec![vec![true]]).unwrap();
/// let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// ```
pub fn extrude_grid(grid: &BitGrid, params: &ExtrudeParams) -> ExtrudeResult<IndexedMesh> {
    params.validate()?;

    if grid.is_empty() {
        debug!("empty grid, nothing to extrude");
        return Ok(IndexedMesh::new());
    }

    let pitch = params.pixel_pitch(grid.rows(), grid.cols());
    let cells: Vec<CellIndex> = grid.active_cells(params.invert).collect();
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        active = cells.len(),
        invert = params.invert,
        "extracted active cells"
    );

    let (vertices, faces) = emit_cells(&cells, pitch, params.depth_mm);
    info!(
        vertices = vertices.len(),
        faces = faces.len(),
        pixel_pitch = format!("{pitch:.3}"),
        depth_mm = params.depth_mm,
        "extruded bitmap grid"
    );

    Ok(assemble(vertices, faces))
}
