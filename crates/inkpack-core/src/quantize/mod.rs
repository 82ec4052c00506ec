//! Quantization of grayscale grids to the panel's bit depth.
//!
//! - **1bpp**: a dithered dark/light decision per pixel ([`dither`]). The
//!   algorithm is a policy choice; only the packing of the result is a
//!   compatibility contract with the device.
//! - **4bpp**: eight equal-width buckets, `level = value / 32`
//!   ([`to_levels`]), no dithering.

mod dither;
mod levels;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConvertError;

pub use dither::dither;
pub use levels::{level_for, level_intensity, to_levels, BUCKET_WIDTH, LEVEL_COUNT, MAX_LEVEL};

/// Cut-off used by the fixed-threshold fallback and by error diffusion.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// How continuous luma becomes a binary decision in 1bpp mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dither {
    /// Floyd-Steinberg error diffusion.
    #[default]
    FloydSteinberg,
    /// Ordered dithering with a 4x4 Bayer matrix.
    Bayer,
    /// Fixed cut-off: dark iff the value is below the threshold.
    ///
    /// Bands visibly on smooth gradients; meant for line art and text.
    Threshold(u8),
}

impl Dither {
    pub fn name(&self) -> &'static str {
        match self {
            Dither::FloydSteinberg => "floyd-steinberg",
            Dither::Bayer => "bayer",
            Dither::Threshold(_) => "threshold",
        }
    }
}

impl fmt::Display for Dither {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dither::Threshold(t) => write!(f, "threshold({})", t),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Dither {
    type Err = ConvertError;

    /// Accepts `floyd-steinberg`, `bayer`, `threshold` and `threshold:<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "floyd-steinberg" | "floyd_steinberg" | "fs" => Ok(Dither::FloydSteinberg),
            "bayer" | "ordered" => Ok(Dither::Bayer),
            "threshold" | "none" => Ok(Dither::Threshold(DEFAULT_THRESHOLD)),
            _ => lower
                .strip_prefix("threshold:")
                .and_then(|t| t.parse::<u8>().ok())
                .map(Dither::Threshold)
                .ok_or_else(|| ConvertError::UnsupportedDither(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_error_diffusion() {
        assert_eq!(Dither::default(), Dither::FloydSteinberg);
    }

    #[test]
    fn test_parse() {
        assert_eq!("floyd-steinberg".parse::<Dither>().unwrap(), Dither::FloydSteinberg);
        assert_eq!("Bayer".parse::<Dither>().unwrap(), Dither::Bayer);
        assert_eq!("threshold".parse::<Dither>().unwrap(), Dither::Threshold(128));
        assert_eq!("threshold:90".parse::<Dither>().unwrap(), Dither::Threshold(90));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "atkinson".parse::<Dither>(),
            Err(ConvertError::UnsupportedDither(name)) if name == "atkinson"
        ));
        assert!("threshold:300".parse::<Dither>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dither::Bayer.to_string(), "bayer");
        assert_eq!(Dither::Threshold(64).to_string(), "threshold(64)");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Dither::FloydSteinberg).unwrap();
        assert_eq!(json, "\"floyd-steinberg\"");

        let parsed: Dither = serde_json::from_str(r#"{"threshold": 100}"#).unwrap();
        assert_eq!(parsed, Dither::Threshold(100));
    }
}
