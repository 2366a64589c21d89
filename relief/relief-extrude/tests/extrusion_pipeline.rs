//! End-to-end tests for the bitmap extrusion pipeline.
//!
//! Exercises the full extract → emit → assemble path through
//! `extrude_grid`, including the diagonal 2×2 scenario in both plain
//! and inverted form.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use relief_extrude::{
    extrude_grid, BitGrid, CellIndex, ExtrudeError, ExtrudeParams, FACES_PER_CELL,
    VERTICES_PER_CELL,
};

/// `[[1, 0], [0, 1]]`: two active cells on the main diagonal.
fn diagonal_grid() -> BitGrid {
    BitGrid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap()
}

/// Pitch 5 at depth 2 for the 2×2 grid (size 10 over 2 cells).
fn diagonal_params() -> ExtrudeParams {
    ExtrudeParams {
        size_mm: 10.0,
        depth_mm: 2.0,
        invert: false,
    }
}

#[test]
fn diagonal_scenario() {
    let grid = diagonal_grid();
    let params = diagonal_params();

    let cells: Vec<CellIndex> = grid.active_cells(params.invert).collect();
    assert_eq!(
        cells,
        vec![CellIndex { row: 0, col: 0 }, CellIndex { row: 1, col: 1 }]
    );

    let mesh = extrude_grid(&grid, &params).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.face_count(), 24);

    // Second cell is (1, 1): footprint corners at 5..10.
    let first = mesh.vertices[VERTICES_PER_CELL].position;
    let opposite = mesh.vertices[VERTICES_PER_CELL + 6].position;
    assert_relative_eq!(first.x, 5.0);
    assert_relative_eq!(first.y, 5.0);
    assert_relative_eq!(first.z, 0.0);
    assert_relative_eq!(opposite.x, 10.0);
    assert_relative_eq!(opposite.y, 10.0);
    assert_relative_eq!(opposite.z, 2.0);
}

#[test]
fn diagonal_scenario_inverted() {
    let grid = diagonal_grid();
    let params = diagonal_params().with_invert(true);

    let cells: Vec<CellIndex> = grid.active_cells(params.invert).collect();
    assert_eq!(
        cells,
        vec![CellIndex { row: 0, col: 1 }, CellIndex { row: 1, col: 0 }]
    );

    let mesh = extrude_grid(&grid, &params).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.face_count(), 24);

    // First active cell is now (0, 1): x spans 5..10, y spans 0..5.
    let first = mesh.vertices[0].position;
    let opposite = mesh.vertices[6].position;
    assert_relative_eq!(first.x, 5.0);
    assert_relative_eq!(first.y, 0.0);
    assert_relative_eq!(opposite.x, 10.0);
    assert_relative_eq!(opposite.y, 5.0);
}

#[test]
fn empty_grid_yields_empty_mesh() {
    for grid in [
        BitGrid::from_rows(vec![]).unwrap(),
        BitGrid::from_fn(0, 7, |_, _| true),
        BitGrid::from_fn(7, 0, |_, _| true),
    ] {
        let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }
}

#[test]
fn all_off_grid_yields_empty_mesh() {
    let grid = BitGrid::from_fn(4, 4, |_, _| false);
    let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
    assert!(mesh.is_empty());

    // Inverted, the same grid fills completely.
    let params = ExtrudeParams::default().with_invert(true);
    let mesh = extrude_grid(&grid, &params).unwrap();
    assert_eq!(mesh.vertex_count(), VERTICES_PER_CELL * 16);
    assert_eq!(mesh.face_count(), FACES_PER_CELL * 16);
}

#[test]
fn counts_match_active_cells_exactly() {
    let grid = BitGrid::from_fn(13, 7, |row, col| (row * col) % 3 == 1);
    let active = grid.active_cells(false).count();
    let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
    assert_eq!(mesh.vertex_count(), VERTICES_PER_CELL * active);
    assert_eq!(mesh.face_count(), FACES_PER_CELL * active);
}

#[test]
fn face_indices_stay_in_bounds() {
    let grid = BitGrid::from_fn(9, 9, |row, col| (row + col) % 2 == 0);
    let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
    let count = u32::try_from(mesh.vertex_count()).unwrap();
    assert!(mesh.faces.iter().flatten().all(|&index| index < count));
}

#[test]
fn invalid_params_fail_before_emission() {
    let grid = diagonal_grid();

    let result = extrude_grid(&grid, &ExtrudeParams::default().with_size_mm(0.0));
    assert!(matches!(result, Err(ExtrudeError::InvalidSize { .. })));

    let result = extrude_grid(&grid, &ExtrudeParams::default().with_depth_mm(-3.0));
    assert!(matches!(result, Err(ExtrudeError::InvalidDepth { .. })));
}

#[test]
fn volume_sums_per_cell() {
    let grid = BitGrid::from_fn(6, 6, |row, col| row >= col);
    let active = grid.active_cells(false).count();
    let params = ExtrudeParams {
        size_mm: 30.0,
        depth_mm: 4.0,
        invert: false,
    };
    let pitch = params.pixel_pitch(grid.rows(), grid.cols());
    let mesh = extrude_grid(&grid, &params).unwrap();

    #[allow(clippy::cast_precision_loss)]
    let expected = active as f64 * pitch * pitch * params.depth_mm;
    assert_relative_eq!(mesh.signed_volume(), expected, epsilon = 1e-9);
}

#[test]
fn non_square_grid_spans_longer_side() {
    // 2 rows × 5 cols, size 50: pitch 10, model spans 50 × 20.
    let grid = BitGrid::from_fn(2, 5, |_, _| true);
    let mesh = extrude_grid(&grid, &ExtrudeParams::default()).unwrap();
    let bounds = mesh.bounds();
    assert_relative_eq!(bounds.size().x, 50.0);
    assert_relative_eq!(bounds.size().y, 20.0);
    assert_relative_eq!(bounds.size().z, 10.0);
}
