//! Resampling of decoded images onto the panel rectangle.
//!
//! The panel has no letterboxing: the source is stretched to fill the exact
//! target rectangle, whatever its aspect ratio.

use log::debug;

use super::{DecodeError, DecodedImage, FilterType};
use crate::PanelConfig;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for a zero target or an empty source,
/// and `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }
    image.check_buffer()?;

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let view = image
        .as_rgb_view()
        .ok_or_else(|| DecodeError::CorruptedFile("pixel buffer too short".to_string()))?;

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());
    Ok(DecodedImage::from_rgb_image(resized))
}

/// Stretch a decoded image onto the panel described by `config`.
pub fn resample(
    image: &DecodedImage,
    config: &PanelConfig,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    debug!(
        "resampling {}x{} -> {}x{} with {}",
        image.width, image.height, config.width, config.height, filter
    );
    resize(image, config.width, config.height, filter)
}

/// Scale factors applied along each axis when stretching to `config`.
///
/// Values differ whenever the source aspect ratio does not match the panel;
/// callers use this to warn about visible distortion.
pub fn stretch_factors(image: &DecodedImage, config: &PanelConfig) -> (f64, f64) {
    if image.width == 0 || image.height == 0 {
        return (0.0, 0.0);
    }
    (
        config.width as f64 / image.width as f64,
        config.height as f64 / image.height as f64,
    )
}
