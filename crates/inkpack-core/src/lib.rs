//! inkpack core - image to packed e-paper bitmap codec
//!
//! Converts a source raster image into the headerless bitmap an Inkplate-class
//! panel reads from storage:
//!
//! 1. [`decode`] - load the source and stretch it onto the panel grid
//! 2. [`quantize`] - dither to 1bpp or bucket into eight 4bpp levels
//! 3. [`pack`] - serialize in the byte layout the firmware expects
//!
//! [`pipeline`] strings the stages together and [`preview`] renders packed
//! streams back into images for inspection.
//!
//! ```ignore
//! use inkpack_core::{convert_file, ConvertOptions, Encoding, PanelConfig};
//!
//! let options = ConvertOptions::new(Encoding::FourBit);
//! convert_file("photo.jpg", "photo.raw", &PanelConfig::default(), &options)?;
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod grid;
pub mod luminance;
pub mod pack;
pub mod pipeline;
pub mod preview;
pub mod quantize;

pub use config::{AlignmentPolicy, PanelConfig, INKPLATE10_HEIGHT, INKPLATE10_WIDTH};
pub use decode::{DecodeError, FilterType};
pub use error::ConvertError;
pub use grid::{BitGrid, GrayGrid, LevelGrid, PixelGrid};
pub use pack::{pack_1bpp, pack_4bpp, Encoding};
pub use pipeline::{
    convert_bytes, convert_file, convert_image, encode_grid, write_packed, ConversionReport,
    ConvertOptions,
};
pub use preview::{encode_preview_png, render_preview, write_preview_png};

/// Image type returned by [`render_preview`].
pub use image::GrayImage;
pub use quantize::Dither;
