//! Extrusion parameters and validation.

use crate::error::{ExtrudeError, ExtrudeResult};

/// Parameters for one extrusion run.
///
/// # Example
///
/// ```
/// use relief_extrude::ExtrudeParams;
///
/// let params = ExtrudeParams::default().with_depth_mm(4.0);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.pixel_pitch(25, 25), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    /// Physical span of the longer bitmap dimension, in mm.
    pub size_mm: f64,

    /// Extrusion height, in mm.
    pub depth_mm: f64,

    /// Extrude the off cells instead of the on cells.
    pub invert: bool,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            size_mm: 50.0,
            depth_mm: 10.0,
            invert: false,
        }
    }
}

impl ExtrudeParams {
    /// Set the physical model size.
    #[must_use]
    pub const fn with_size_mm(mut self, size_mm: f64) -> Self {
        self.size_mm = size_mm;
        self
    }

    /// Set the extrusion depth.
    #[must_use]
    pub const fn with_depth_mm(mut self, depth_mm: f64) -> Self {
        self.depth_mm = depth_mm;
        self
    }

    /// Set cell inversion.
    #[must_use]
    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Check that size and depth are positive finite numbers.
    ///
    /// Rejecting non-positive values here keeps degenerate geometry out
    /// of the pipeline; zero-area output is only produced when a caller
    /// bypasses [`extrude_grid`](crate::extrude_grid) and feeds the
    /// emitter directly.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::InvalidSize`] or
    /// [`ExtrudeError::InvalidDepth`] naming the rejected value.
    pub fn validate(&self) -> ExtrudeResult<()> {
        if !(self.size_mm.is_finite() && self.size_mm > 0.0) {
            return Err(ExtrudeError::InvalidSize { mm: self.size_mm });
        }
        if !(self.depth_mm.is_finite() && self.depth_mm > 0.0) {
            return Err(ExtrudeError::InvalidDepth { mm: self.depth_mm });
        }
        Ok(())
    }

    /// Physical size of one cell for a grid of the given dimensions.
    ///
    /// The divisor is the longer grid dimension, so `size_mm` always
    /// spans the longer side of the model. Code-symbol matrices are
    /// square, where this coincides with dividing by the side length.
    /// Returns 0 for an empty grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Grid dimensions are far below 2^52
    pub fn pixel_pitch(&self, rows: usize, cols: usize) -> f64 {
        let longer = rows.max(cols);
        if longer == 0 {
            0.0
        } else {
            self.size_mm / longer as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ExtrudeParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_size() {
        for bad in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let params = ExtrudeParams::default().with_size_mm(bad);
            assert!(matches!(
                params.validate(),
                Err(ExtrudeError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_positive_depth() {
        for bad in [0.0, -1.0, f64::NAN] {
            let params = ExtrudeParams::default().with_depth_mm(bad);
            assert!(matches!(
                params.validate(),
                Err(ExtrudeError::InvalidDepth { .. })
            ));
        }
    }

    #[test]
    fn pitch_uses_longer_dimension() {
        let params = ExtrudeParams::default().with_size_mm(100.0);
        assert!((params.pixel_pitch(50, 20) - 2.0).abs() < f64::EPSILON);
        assert!((params.pixel_pitch(20, 50) - 2.0).abs() < f64::EPSILON);
        assert!((params.pixel_pitch(25, 25) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pitch_of_empty_grid_is_zero() {
        let params = ExtrudeParams::default();
        assert!(params.pixel_pitch(0, 0).abs() < f64::EPSILON);
    }
}
