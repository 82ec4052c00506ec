//! Byte layouts understood by the panel firmware.
//!
//! Both layouts walk the grid as one flat scan-order sequence; row
//! boundaries play no part. The stream has no header: width, height and
//! encoding are configured on the device out of band.
//!
//! | Encoding | Pixels per byte | First pixel lands in |
//! |----------|-----------------|----------------------|
//! | `1bpp`   | 8               | bit 0 (LSB)          |
//! | `4bpp`   | 2               | bits 0-3 (low nibble)|

mod bits;
mod nibbles;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConvertError;

pub use bits::{pack_1bpp, unpack_1bpp};
pub use nibbles::{pack_4bpp, unpack_4bpp};

/// Pixel encoding of the packed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// One bit per pixel, set = dark.
    #[default]
    #[serde(rename = "1bpp")]
    OneBit,
    /// Four bits per pixel holding a level in 0..=7.
    #[serde(rename = "4bpp")]
    FourBit,
}

impl Encoding {
    pub fn pixels_per_byte(self) -> usize {
        match self {
            Encoding::OneBit => 8,
            Encoding::FourBit => 2,
        }
    }

    pub fn bits_per_pixel(self) -> u32 {
        8 / self.pixels_per_byte() as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::OneBit => "1bpp",
            Encoding::FourBit => "4bpp",
        }
    }

    /// Exact stream length for `pixel_count` pixels, rounding a partial
    /// final group up to a whole byte.
    pub fn packed_len(self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(self.pixels_per_byte())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1bpp" => Ok(Encoding::OneBit),
            "4bpp" => Ok(Encoding::FourBit),
            _ => Err(ConvertError::UnsupportedMode(s.to_string())),
        }
    }
}
