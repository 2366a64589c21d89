//! Error types for bitmap sources.

use thiserror::Error;

/// Result type for bitmap source operations.
pub type BitmapResult<T> = std::result::Result<T, BitmapError>;

/// Errors that can occur while building a source bitmap.
#[derive(Debug, Error)]
pub enum BitmapError {
    /// The text could not be encoded as a code symbol.
    #[error("symbol encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The raster image could not be opened or decoded.
    #[error("image decoding failed: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_error_display() {
        let err = BitmapError::from(qrcode::types::QrError::DataTooLong);
        assert!(format!("{err}").starts_with("symbol encoding failed"));
    }
}
