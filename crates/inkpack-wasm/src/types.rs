//! JS-facing wrapper types.

use inkpack_core::Encoding;
use wasm_bindgen::prelude::*;

/// Grayscale rendering of a packed stream, one byte per pixel.
///
/// Expand to RGBA before drawing it onto a canvas.
#[wasm_bindgen]
pub struct JsPreview {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPreview {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the intensities as a Uint8Array (copied out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsPreview {
    pub(crate) fn from_gray(image: inkpack_core::GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        }
    }
}

/// Parse a mode string such as `"1bpp"` or `"4bpp"`.
pub(crate) fn parse_mode(mode: &str) -> Result<Encoding, inkpack_core::ConvertError> {
    mode.parse()
}

/// Map a core error onto the JS exception value.
pub(crate) fn to_js_error(err: inkpack_core::ConvertError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("1bpp").unwrap(), Encoding::OneBit);
        assert_eq!(parse_mode("4bpp").unwrap(), Encoding::FourBit);
        assert!(parse_mode("2bpp").is_err());
    }
}
