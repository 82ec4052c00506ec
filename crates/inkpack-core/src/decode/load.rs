//! Source image loading with EXIF orientation and alpha handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use log::debug;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image from bytes in any format the image codec was built with.
///
/// EXIF orientation is applied so the picture lands on the panel the way a
/// photo viewer would show it, and transparent areas are composited onto a
/// white page.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be identified and
/// `DecodeError::CorruptedFile` if the data fails to decode.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    let Some(format) = reader.format() else {
        return Err(DecodeError::InvalidFormat);
    };

    let img = reader.decode().map_err(map_image_error)?;
    debug!(
        "decoded {:?} source {}x{} ({:?}, orientation {:?})",
        format,
        img.width(),
        img.height(),
        img.color(),
        orientation
    );

    let oriented = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(flatten_onto_white(oriented)))
}

/// Read and decode an image file.
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_bytes(&bytes)
}

/// Reads come from memory, so an I/O error here means truncated data.
fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}

/// Returns `Orientation::Normal` when there is no readable EXIF block.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Composite any alpha channel over white; paper is the panel's background.
fn flatten_onto_white(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        dst.0 = [blend_white(r, a), blend_white(g, a), blend_white(b, a)];
    }
    out
}

#[inline]
fn blend_white(channel: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + 255 * (255 - a) + 127) / 255) as u8
}
