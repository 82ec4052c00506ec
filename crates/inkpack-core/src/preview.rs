//! Rendering packed streams back into viewable images.
//!
//! This is the inverse direction of the pipeline, used to eyeball what the
//! panel will show without flashing a device. Dark 1bpp pixels render black,
//! light ones white; 4bpp levels spread evenly over 0..=255.

use std::io::Cursor;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder};
use log::debug;

use crate::pack::{unpack_1bpp, unpack_4bpp, Encoding};
use crate::quantize::level_intensity;
use crate::{ConvertError, PanelConfig};

/// Decode a packed stream into a grayscale image of the panel's size.
///
/// # Errors
///
/// `InvalidStreamLength` if `packed` does not hold exactly one frame for
/// `config` and `encoding`.
pub fn render_preview(
    packed: &[u8],
    config: &PanelConfig,
    encoding: Encoding,
) -> Result<GrayImage, ConvertError> {
    let pixel_count = config.pixel_count();
    let intensities: Vec<u8> = match encoding {
        Encoding::OneBit => unpack_1bpp(packed, pixel_count)?
            .into_iter()
            .map(|dark| if dark { 0 } else { 255 })
            .collect(),
        Encoding::FourBit => unpack_4bpp(packed, pixel_count)?
            .into_iter()
            .map(level_intensity)
            .collect(),
    };

    GrayImage::from_raw(config.width, config.height, intensities).ok_or(
        ConvertError::InvalidDimensions {
            width: config.width,
            height: config.height,
        },
    )
}

/// Encode a preview image as PNG bytes.
pub fn encode_preview_png(preview: &GrayImage) -> Result<Vec<u8>, ConvertError> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            preview.as_raw(),
            preview.width(),
            preview.height(),
            ExtendedColorType::L8,
        )
        .map_err(|e| ConvertError::Preview(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Render `packed` and write it to `path` as a PNG.
pub fn write_preview_png(
    path: impl AsRef<Path>,
    packed: &[u8],
    config: &PanelConfig,
    encoding: Encoding,
) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let preview = render_preview(packed, config, encoding)?;
    let png = encode_preview_png(&preview)?;
    std::fs::write(path, &png)?;
    debug!("wrote {} byte preview to {}", png.len(), path.display());
    Ok(())
}
