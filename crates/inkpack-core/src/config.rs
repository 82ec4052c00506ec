//! Panel configuration.
//!
//! The panel resolution is fixed for a given device, so it is configured once
//! at startup and passed explicitly to the resampler and packers. Other panel
//! variants are a different `PanelConfig`, never new code.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::pack::Encoding;
use crate::ConvertError;

/// Inkplate 10 panel width in pixels.
pub const INKPLATE10_WIDTH: u32 = 1200;
/// Inkplate 10 panel height in pixels.
pub const INKPLATE10_HEIGHT: u32 = 825;

/// What to do when `width * height` does not split into whole packing groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPolicy {
    /// Refuse the configuration before any pixel work.
    #[default]
    Reject,
    /// Fill the last group with light (1bpp) or zero-level (4bpp) pixels.
    PadLight,
}

/// Resolution and packing policy of the target panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
    /// Handling of grids that do not fill the last byte.
    pub alignment: AlignmentPolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::inkplate10()
    }
}

impl PanelConfig {
    /// A panel of the given size with the default (rejecting) alignment policy.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alignment: AlignmentPolicy::default(),
        }
    }

    pub fn inkplate10() -> Self {
        Self::new(INKPLATE10_WIDTH, INKPLATE10_HEIGHT)
    }

    pub fn with_alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that this panel can be packed with `encoding`.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for an empty panel; `MisalignedGrid` when the pixel
    /// count is not a multiple of the encoding's group size and the policy is
    /// [`AlignmentPolicy::Reject`].
    pub fn validate(&self, encoding: Encoding) -> Result<(), ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let group = encoding.pixels_per_byte();
        if self.pixel_count() % group != 0 && self.alignment == AlignmentPolicy::Reject {
            return Err(ConvertError::MisalignedGrid {
                width: self.width,
                height: self.height,
                group,
            });
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Load a panel description from a JSON file.
    ///
    /// Missing fields fall back to the Inkplate 10 defaults, so
    /// `{"alignment": "pad-light"}` is a complete file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ConvertError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("loaded panel config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
