//! Code-symbol encoding.

use qrcode::{Color, EcLevel, QrCode};
use relief_extrude::BitGrid;
use tracing::debug;

use crate::error::BitmapResult;

/// Encode text as a code-symbol module matrix.
///
/// Encodes at error-correction level H. Dark modules map to on cells,
/// and the matrix is wrapped in a quiet zone of `border` off modules on
/// every side.
///
/// # Errors
///
/// Returns [`BitmapError::Encode`](crate::BitmapError::Encode) if the
/// text does not fit any symbol version at level H.
///
/// # Example
///
/// ```
/// use relief_bitmap::encode_text;
///
/// let grid = encode_text("https://example.com/", 4).unwrap();
/// assert_eq!(grid.rows(), grid.cols());
/// assert!(!grid.get(0, 0)); // quiet zone
/// ```
pub fn encode_text(text: &str, border: usize) -> BitmapResult<BitGrid> {
    let code = QrCode::with_error_correction_level(text, EcLevel::H)?;
    let width = code.width();
    let colors = code.to_colors();
    let side = width + 2 * border;
    debug!(modules = width, side, "encoded text symbol");

    Ok(BitGrid::from_fn(side, side, move |row, col| {
        match (row.checked_sub(border), col.checked_sub(border)) {
            (Some(r), Some(c)) if r < width && c < width => colors[r * width + c] == Color::Dark,
            _ => false,
        }
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_square_with_quiet_zone() {
        let grid = encode_text("https://example.com/", 4).unwrap();
        assert_eq!(grid.rows(), grid.cols());
        // Smallest symbol is 21 modules wide.
        assert!(grid.rows() >= 21 + 8);

        // The quiet zone stays dark-free on all four sides.
        let side = grid.rows();
        for i in 0..side {
            for b in 0..4 {
                assert!(!grid.get(b, i));
                assert!(!grid.get(side - 1 - b, i));
                assert!(!grid.get(i, b));
                assert!(!grid.get(i, side - 1 - b));
            }
        }
    }

    #[test]
    fn symbol_has_dark_modules() {
        let grid = encode_text("x", 4).unwrap();
        assert!(grid.active_cells(false).count() > 0);
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = encode_text("deterministic", 2).unwrap();
        let b = encode_text("deterministic", 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_border_keeps_bare_matrix() {
        let bordered = encode_text("x", 4).unwrap();
        let bare = encode_text("x", 0).unwrap();
        assert_eq!(bare.rows() + 8, bordered.rows());
    }

    #[test]
    fn finder_pattern_corner_is_dark() {
        // Top-left finder pattern starts at the first module inside the
        // quiet zone.
        let grid = encode_text("finder", 4).unwrap();
        assert!(grid.get(4, 4));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let text = "x".repeat(8000);
        assert!(encode_text(&text, 4).is_err());
    }
}
