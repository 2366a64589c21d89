//! Styled module rasterization.
//!
//! Blows a module grid up to `scale` pixels per module while drawing
//! each module in a visual style. The output is an ordinary [`BitGrid`]
//! at raster resolution; the extrusion core never sees styles.

// Sub-module offsets are tiny, f64 represents them exactly
#![allow(clippy::cast_precision_loss)]

use relief_extrude::BitGrid;

/// Visual style for rasterized modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStyle {
    /// Plain square modules (identity blow-up).
    Square,
    /// One disc per module.
    Round,
    /// Discs bridged into capsules along horizontal runs of modules.
    Line,
}

/// Rasterize a module grid at `scale` pixels per module.
///
/// A `scale` of 0 is treated as 1, where every style degenerates to
/// `Square`.
///
/// # Example
///
/// ```
/// use relief_bitmap::{stylize, ModuleStyle};
/// use relief_extrude::BitGrid;
///
/// let module = BitGrid::from_fn(1, 1, |_, _| true);
/// let dot = stylize(&module, ModuleStyle::Round, 4);
/// assert_eq!(dot.rows(), 4);
/// assert!(dot.get(1, 1));  // near the center
/// assert!(!dot.get(0, 0)); // corner clipped off
/// ```
#[must_use]
pub fn stylize(grid: &BitGrid, style: ModuleStyle, scale: usize) -> BitGrid {
    let scale = scale.max(1);
    BitGrid::from_fn(grid.rows() * scale, grid.cols() * scale, |row, col| {
        let (cell_row, cell_col) = (row / scale, col / scale);
        if !grid.get(cell_row, cell_col) {
            return false;
        }
        let (sub_row, sub_col) = (row % scale, col % scale);
        match style {
            ModuleStyle::Square => true,
            ModuleStyle::Round => in_dot(sub_row, sub_col, scale),
            ModuleStyle::Line => {
                // Right and left halves fill toward same-row neighbors,
                // turning runs into capsules with disc end caps.
                in_dot(sub_row, sub_col, scale)
                    || (2 * sub_col + 1 >= scale && grid.get(cell_row, cell_col + 1))
                    || (2 * sub_col + 1 <= scale
                        && cell_col
                            .checked_sub(1)
                            .is_some_and(|left| grid.get(cell_row, left)))
            }
        }
    })
}

/// Whether a sub-module pixel lies inside the module's inscribed disc.
fn in_dot(sub_row: usize, sub_col: usize, scale: usize) -> bool {
    let center = (scale as f64 - 1.0) / 2.0;
    let dx = sub_col as f64 - center;
    let dy = sub_row as f64 - center;
    let radius = scale as f64 / 2.0;
    dx * dx + dy * dy <= radius * radius
}
