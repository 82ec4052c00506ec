//! End-to-end conversion: load, resample, quantize, pack, write.
//!
//! Stages run strictly forward on a grid owned by the run. The panel
//! configuration is validated before any pixel work, so an unpackable
//! resolution fails fast.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::decode::{self, DecodeError, DecodedImage, FilterType};
use crate::grid::GrayGrid;
use crate::pack::{pack_1bpp, pack_4bpp, Encoding};
use crate::quantize::{dither, to_levels, Dither};
use crate::{ConvertError, PanelConfig};

/// Relative difference between axis scale factors above which the stretch
/// is reported as visible distortion.
const DISTORTION_TOLERANCE: f64 = 0.01;

/// Per-run conversion choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Output pixel encoding.
    pub encoding: Encoding,
    /// Binarization policy; only used for 1bpp.
    pub dither: Dither,
    /// Resampling kernel.
    pub filter: FilterType,
}

impl ConvertOptions {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }
}

/// Summary of a finished file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub source_width: u32,
    pub source_height: u32,
    pub encoding: Encoding,
    pub bytes_written: usize,
}

/// Quantize a panel-sized grayscale grid and pack it.
pub fn encode_grid(gray: &GrayGrid, options: &ConvertOptions) -> Vec<u8> {
    match options.encoding {
        Encoding::OneBit => pack_1bpp(dither(gray, options.dither).samples()),
        Encoding::FourBit => pack_4bpp(to_levels(gray).samples()),
    }
}

/// Convert an already decoded image into the packed stream for `config`.
pub fn convert_image(
    image: &DecodedImage,
    config: &PanelConfig,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError> {
    config.validate(options.encoding)?;

    let (sx, sy) = decode::stretch_factors(image, config);
    if sx > 0.0 && (sx - sy).abs() / sx.max(sy) > DISTORTION_TOLERANCE {
        warn!(
            "source {}x{} does not match the {}x{} panel aspect ratio; stretching",
            image.width, image.height, config.width, config.height
        );
    }

    let resampled = decode::resample(image, config, options.filter)?;
    let gray = GrayGrid::from_rgb(&resampled).ok_or_else(|| {
        DecodeError::CorruptedFile("resampled buffer does not match its size".to_string())
    })?;
    let packed = encode_grid(&gray, options);

    debug_assert_eq!(packed.len(), options.encoding.packed_len(config.pixel_count()));
    debug!(
        "packed {}x{} grid into {} bytes ({})",
        gray.width(),
        gray.height(),
        packed.len(),
        options.encoding
    );
    Ok(packed)
}

/// Decode image bytes and convert them.
pub fn convert_bytes(
    bytes: &[u8],
    config: &PanelConfig,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError> {
    config.validate(options.encoding)?;
    let image = decode::decode_bytes(bytes)?;
    convert_image(&image, config, options)
}

/// Convert the image at `input` and write the packed stream to `output`.
///
/// `output` is created or truncated. A failed write is always returned as an
/// error; the partial file is left in place.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &PanelConfig,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    config.validate(options.encoding)?;

    let image = decode::decode_file(input)?;
    let packed = convert_image(&image, config, options)?;
    write_packed(output, &packed)?;

    info!(
        "{} -> {} ({}, {} bytes)",
        input.display(),
        output.display(),
        options.encoding,
        packed.len()
    );
    Ok(ConversionReport {
        source_width: image.width,
        source_height: image.height,
        encoding: options.encoding,
        bytes_written: packed.len(),
    })
}

/// Write the packed stream verbatim, with no header or trailer.
pub fn write_packed(path: impl AsRef<Path>, packed: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(packed)?;
    file.sync_all()
}
