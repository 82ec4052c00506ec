//! Errors surfaced by a conversion run.
//!
//! Every failure is fatal for the run; nothing here is retried.

use thiserror::Error;

use crate::decode::DecodeError;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source image could not be read or parsed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Encoding selector other than `1bpp` or `4bpp`.
    #[error("Unsupported mode '{0}' (expected 1bpp or 4bpp)")]
    UnsupportedMode(String),

    #[error("Unsupported dithering method '{0}' (expected floyd-steinberg, bayer or threshold)")]
    UnsupportedDither(String),

    #[error("Unsupported resampling filter '{0}' (expected nearest, bilinear, bicubic, lanczos3)")]
    UnsupportedFilter(String),

    /// The panel does not split into whole packing groups and padding is off.
    #[error("{width}x{height} grid is not divisible into groups of {group} pixels")]
    MisalignedGrid { width: u32, height: u32, group: usize },

    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// A packed stream whose length does not match the panel and encoding.
    #[error("Packed stream has {actual} bytes, expected {expected}")]
    InvalidStreamLength { expected: usize, actual: usize },

    #[error("Invalid panel configuration: {0}")]
    Config(String),

    #[error("Preview encoding failed: {0}")]
    Preview(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_is_transparent() {
        let err = ConvertError::from(DecodeError::InvalidFormat);
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }

    #[test]
    fn test_misaligned_message() {
        let err = ConvertError::MisalignedGrid {
            width: 3,
            height: 3,
            group: 8,
        };
        assert_eq!(
            err.to_string(),
            "3x3 grid is not divisible into groups of 8 pixels"
        );
    }

    #[test]
    fn test_unsupported_mode_message() {
        let err = ConvertError::UnsupportedMode("2bpp".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported mode '2bpp' (expected 1bpp or 4bpp)"
        );
    }
}
