//! Loading and resampling: everything that happens before quantization.
//!
//! Decoding is delegated to the `image` crate; this module adds EXIF
//! orientation, alpha flattening and the stretch onto the panel grid.
//!
//! ```ignore
//! use inkpack_core::decode::{decode_file, resample, FilterType};
//! use inkpack_core::PanelConfig;
//!
//! let source = decode_file("photo.jpg")?;
//! let panel = resample(&source, &PanelConfig::default(), FilterType::default())?;
//! assert_eq!(panel.width, 1200);
//! ```

mod load;
mod resize;
mod types;

pub use load::{decode_bytes, decode_file};
pub use resize::{resample, resize, stretch_factors};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
