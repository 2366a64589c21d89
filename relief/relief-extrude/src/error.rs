//! Error types for the extrusion engine.

use thiserror::Error;

/// Errors that can occur while building or extruding a bitmap grid.
#[derive(Debug, Error)]
pub enum ExtrudeError {
    /// Source rows have unequal lengths.
    #[error("ragged bitmap: row {row} has {got} cells, expected {expected}")]
    RaggedBitmap {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row, which sets the grid width.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Physical model size is not a positive finite number.
    #[error("model size must be positive and finite, got {mm} mm")]
    InvalidSize {
        /// The rejected value.
        mm: f64,
    },

    /// Extrusion depth is not a positive finite number.
    #[error("extrusion depth must be positive and finite, got {mm} mm")]
    InvalidDepth {
        /// The rejected value.
        mm: f64,
    },
}

/// Result type for extrusion operations.
pub type ExtrudeResult<T> = std::result::Result<T, ExtrudeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ExtrudeError::RaggedBitmap {
            row: 3,
            expected: 21,
            got: 20,
        };
        assert_eq!(
            format!("{err}"),
            "ragged bitmap: row 3 has 20 cells, expected 21"
        );

        let err = ExtrudeError::InvalidDepth { mm: -2.0 };
        assert!(format!("{err}").contains("-2"));
    }
}
